//! Uniform points in the 12-dimensional unit ball.
//!
//! Rejection from the cube `[-1, 1)^12` is exact but hopeless: the ball fills
//! `pi^6 / (6! * 2^12)`, about `3.3e-4`, of the cube, so each point costs
//! roughly 3000 trials and 37000 uniforms. It is kept as the baseline.
//!
//! The order-statistics method needs six uniforms plus six directions and
//! never rejects. Split the point into six planar pairs with squared radii
//! `q_0..q_5`. For a uniform point in the 12-ball, `(q_0, .., q_5)` is uniform
//! on the simplex `{q >= 0, sum q <= 1}` (each pair contributes a factor
//! `pi dq_j` to the volume element). The gaps between consecutive order
//! statistics of six uniforms, `z_(j) - z_(j-1)` with `z_(-1) = 0`, are
//! exactly such a simplex point. Each pair is then placed at radius
//! `sqrt(q_j)` along an independent [`random_azimuth`] direction.
//!
//! The total squared radius telescopes to `max(z)`, whose CDF is `t^6 = r^12`,
//! matching the 12-ball's radial law and giving `E[r^2] = 6/7`.
//!
//! The same construction works for any even dimension `2k` with `k` uniforms.

use std::fmt;

use rand::distr::Distribution;
use rand::{Rng, RngCore};

use crate::azimuth::random_azimuth;
use crate::source::unit_f32;
use crate::stats::{clamp_to_unit_ball, Sample};

/// Dimension of the ball.
pub const DIM: usize = 12;

/// Planar pairs per point.
pub const PAIRS: usize = DIM / 2;

/// Probability that one rejection trial lands in the ball, `pi^6 / (720 * 4096)`.
pub const HYPERBALL12_ACCEPTANCE: f64 = 3.259_918_869_273_9e-4;

/// 12-ball sampling algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hyperball12Method {
    /// Redraw all twelve coordinates until inside. Baseline only.
    Rejection,
    /// Order-statistic gaps as per-pair squared radii. No rejection.
    #[default]
    OrderStatistics,
}

impl Hyperball12Method {
    /// Every method, in benchmark order.
    pub const ALL: [Self; 2] = [Self::Rejection, Self::OrderStatistics];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rejection => "rejection",
            Self::OrderStatistics => "order-statistics",
        }
    }
}

impl fmt::Display for Hyperball12Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw one point with `method`.
#[inline]
pub fn sample_hyperball12<R: RngCore + ?Sized>(
    rng: &mut R,
    method: Hyperball12Method,
) -> Sample<[f32; DIM]> {
    match method {
        Hyperball12Method::Rejection => hyperball12_rejection(rng),
        Hyperball12Method::OrderStatistics => {
            Sample::direct(hyperball12_order_statistics(rng))
        }
    }
}

/// Rejection from the cube; reports the number of trials.
///
/// All twelve coordinates are drawn on every trial.
#[inline]
pub fn hyperball12_rejection<R: RngCore + ?Sized>(rng: &mut R) -> Sample<[f32; DIM]> {
    let mut point = [0.0f32; DIM];
    let mut attempts = 0;
    loop {
        attempts += 1;
        let mut r2 = 0.0f32;
        for x in &mut point {
            *x = 2.0 * unit_f32(rng) - 1.0;
            r2 += *x * *x;
        }
        if r2 <= 1.0 {
            return Sample { point, attempts };
        }
    }
}

/// Gaps between the sorted values of six uniforms, starting from zero.
///
/// Every gap is non-negative and they sum to the largest uniform (up to
/// rounding), which is below one.
#[inline]
pub fn order_statistic_gaps<R: RngCore + ?Sized>(rng: &mut R) -> [f32; PAIRS] {
    let mut z = [0.0f32; PAIRS];
    for v in &mut z {
        *v = unit_f32(rng);
    }
    z.sort_unstable_by(f32::total_cmp);

    let mut last = 0.0;
    for v in &mut z {
        let gap = *v - last;
        last = *v;
        *v = gap;
    }
    z
}

/// Order-statistics construction; always one attempt.
#[inline]
pub fn hyperball12_order_statistics<R: RngCore + ?Sized>(rng: &mut R) -> [f32; DIM] {
    let gaps = order_statistic_gaps(rng);
    let mut point = [0.0f32; DIM];
    for (pair, gap) in point.chunks_exact_mut(2).zip(gaps) {
        let r = gap.sqrt();
        let (c, s) = random_azimuth(rng);
        pair[0] = r * c;
        pair[1] = r * s;
    }
    clamp_to_unit_ball(&mut point);
    point
}

/// The uniform distribution on the unit 12-ball, as a `rand` distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitHyperball12(pub Hyperball12Method);

impl Distribution<[f32; DIM]> for UnitHyperball12 {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; DIM] {
        sample_hyperball12(rng, self.0).point
    }
}
