//! Uniform points in the unit ball.
//!
//! Same three strategies as the disk. The radius of a uniform ball point has
//! density `3r^2` and CDF `r^3`, so the direct methods use `r = U^(1/3)` or
//! `r = max(U1, U2, U3)`. The direction is an isotropic point on the sphere:
//! `cos(theta) = 2U - 1` (Archimedes' hat-box theorem makes `z` uniform) and
//! an independent [`random_azimuth`] for the longitude.

use std::fmt;

use rand::distr::Distribution;
use rand::{Rng, RngCore};

use crate::azimuth::random_azimuth;
use crate::source::unit_f32;
use crate::stats::{clamp_to_unit_ball, Sample};

/// Probability that one rejection trial lands in the ball: `(4 pi / 3) / 8`.
pub const BALL_ACCEPTANCE: f64 = std::f64::consts::PI / 6.0;

/// Ball sampling algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BallMethod {
    /// Redraw from the enclosing cube until inside.
    #[default]
    Rejection,
    /// `r = cbrt(U)` plus a random direction.
    CubeRootRadius,
    /// `r = max(U1, U2, U3)` plus a random direction.
    MaxOfThree,
}

impl BallMethod {
    /// Every method, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Rejection, Self::CubeRootRadius, Self::MaxOfThree];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rejection => "rejection",
            Self::CubeRootRadius => "cbrt-radius",
            Self::MaxOfThree => "max-of-three",
        }
    }
}

impl fmt::Display for BallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw one point with `method`.
#[inline]
pub fn sample_ball<R: RngCore + ?Sized>(rng: &mut R, method: BallMethod) -> Sample<[f32; 3]> {
    match method {
        BallMethod::Rejection => ball_rejection(rng),
        BallMethod::CubeRootRadius => Sample::direct(ball_cbrt_radius(rng)),
        BallMethod::MaxOfThree => Sample::direct(ball_max_of_three(rng)),
    }
}

/// Rejection from the cube; reports the number of trials.
#[inline]
pub fn ball_rejection<R: RngCore + ?Sized>(rng: &mut R) -> Sample<[f32; 3]> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let x = 2.0 * unit_f32(rng) - 1.0;
        let y = 2.0 * unit_f32(rng) - 1.0;
        let z = 2.0 * unit_f32(rng) - 1.0;
        if x * x + y * y + z * z <= 1.0 {
            return Sample {
                point: [x, y, z],
                attempts,
            };
        }
    }
}

/// `r = cbrt(U)` along an isotropic direction.
#[inline]
pub fn ball_cbrt_radius<R: RngCore + ?Sized>(rng: &mut R) -> [f32; 3] {
    let r = unit_f32(rng).cbrt();
    place(rng, r)
}

/// `r = max(U1, U2, U3)` along an isotropic direction.
#[inline]
pub fn ball_max_of_three<R: RngCore + ?Sized>(rng: &mut R) -> [f32; 3] {
    let r = unit_f32(rng).max(unit_f32(rng)).max(unit_f32(rng));
    place(rng, r)
}

#[inline]
fn place<R: RngCore + ?Sized>(rng: &mut R, r: f32) -> [f32; 3] {
    let cos_theta = 2.0 * unit_f32(rng) - 1.0;
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let rs = r * sin_theta;
    let (c, s) = random_azimuth(rng);
    let mut p = [rs * c, rs * s, r * cos_theta];
    clamp_to_unit_ball(&mut p);
    p
}

/// The uniform distribution on the unit ball, as a `rand` distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitBall(pub BallMethod);

impl Distribution<[f32; 3]> for UnitBall {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 3] {
        sample_ball(rng, self.0).point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_generator;
    use crate::stats::{norm_squared, RunStats, BALL_MEAN_R2};
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_method_stays_inside() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10_000 {
            let s = ball_rejection(&mut rng);
            assert!(norm_squared(&s.point) <= 1.0);
        }
        for method in [BallMethod::CubeRootRadius, BallMethod::MaxOfThree] {
            for _ in 0..10_000 {
                let s = sample_ball(&mut rng, method);
                assert_eq!(s.attempts, 1);
                assert!(norm_squared(&s.point) <= 1.0, "{method}: {:?}", s.point);
            }
        }
    }

    #[test]
    fn mean_squared_radius_matches_for_every_method() {
        // Var(r^2) = 3/7 - 9/25 ~ 0.069; se over 1e6 draws ~ 2.6e-4.
        let mut rng = default_generator(0);
        for method in BallMethod::ALL {
            let stats = RunStats::collect(1_000_000, || sample_ball(&mut rng, method));
            let mean = stats.mean_r2().expect("non-empty");
            assert_abs_diff_eq!(mean, BALL_MEAN_R2, epsilon = 2e-3);
        }
    }

    #[test]
    fn rejection_efficiency_is_pi_over_six() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let stats = RunStats::collect(200_000, || ball_rejection(&mut rng));
        let eff = stats.efficiency().expect("non-empty");
        assert_abs_diff_eq!(eff, BALL_ACCEPTANCE, epsilon = 0.01);
    }

    #[test]
    fn direct_methods_are_isotropic() {
        // Each coordinate of a uniform ball point has mean 0 and E[x^2] = 1/5.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let n = 200_000;
        for method in BallMethod::ALL {
            let mut sum = [0.0f64; 3];
            let mut sum_sq = [0.0f64; 3];
            for _ in 0..n {
                let p = sample_ball(&mut rng, method).point;
                for k in 0..3 {
                    sum[k] += f64::from(p[k]);
                    sum_sq[k] += f64::from(p[k] * p[k]);
                }
            }
            for k in 0..3 {
                assert_abs_diff_eq!(sum[k] / n as f64, 0.0, epsilon = 0.01);
                assert_abs_diff_eq!(sum_sq[k] / n as f64, 0.2, epsilon = 0.01);
            }
        }
    }

    #[test]
    fn distribution_impl_matches_function() {
        let mut a = ChaCha8Rng::seed_from_u64(4);
        let mut b = a.clone();
        let dist = UnitBall(BallMethod::CubeRootRadius);
        for _ in 0..100 {
            assert_eq!(a.sample(dist), sample_ball(&mut b, BallMethod::CubeRootRadius).point);
        }
    }
}
