//! Uniform points in the unit disk.
//!
//! Three exact methods:
//!
//! - **Rejection**: uniform in the square `[-1, 1)^2`, redrawn until inside.
//!   Accepts `pi / 4` of trials.
//! - **Square-root radius**: the radius of a uniform disk point has density
//!   `2r`, CDF `r^2`; inverting gives `r = sqrt(U)`.
//! - **Max of two**: `max(U1, U2)` has CDF `r^2` as well, so it is the same
//!   radius law without the square root.
//!
//! The direct methods place the radius along a [`random_azimuth`] direction.

use std::fmt;

use rand::distr::Distribution;
use rand::{Rng, RngCore};

use crate::azimuth::random_azimuth;
use crate::source::unit_f32;
use crate::stats::{clamp_to_unit_ball, Sample};

/// Probability that one rejection trial lands in the disk.
pub const DISK_ACCEPTANCE: f64 = std::f64::consts::FRAC_PI_4;

/// Disk sampling algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiskMethod {
    /// Redraw from the enclosing square until inside.
    #[default]
    Rejection,
    /// `r = sqrt(U)` plus a random direction.
    SqrtRadius,
    /// `r = max(U1, U2)` plus a random direction.
    MaxOfTwo,
}

impl DiskMethod {
    /// Every method, in benchmark order.
    pub const ALL: [Self; 3] = [Self::Rejection, Self::SqrtRadius, Self::MaxOfTwo];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rejection => "rejection",
            Self::SqrtRadius => "sqrt-radius",
            Self::MaxOfTwo => "max-of-two",
        }
    }
}

impl fmt::Display for DiskMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw one point with `method`.
#[inline]
pub fn sample_disk<R: RngCore + ?Sized>(rng: &mut R, method: DiskMethod) -> Sample<[f32; 2]> {
    match method {
        DiskMethod::Rejection => disk_rejection(rng),
        DiskMethod::SqrtRadius => Sample::direct(disk_sqrt_radius(rng)),
        DiskMethod::MaxOfTwo => Sample::direct(disk_max_of_two(rng)),
    }
}

/// Rejection from the square; reports the number of trials.
#[inline]
pub fn disk_rejection<R: RngCore + ?Sized>(rng: &mut R) -> Sample<[f32; 2]> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let x = 2.0 * unit_f32(rng) - 1.0;
        let y = 2.0 * unit_f32(rng) - 1.0;
        if x * x + y * y <= 1.0 {
            return Sample {
                point: [x, y],
                attempts,
            };
        }
    }
}

/// `r = sqrt(U)` along a random direction.
#[inline]
pub fn disk_sqrt_radius<R: RngCore + ?Sized>(rng: &mut R) -> [f32; 2] {
    let r = unit_f32(rng).sqrt();
    place(rng, r)
}

/// `r = max(U1, U2)` along a random direction.
#[inline]
pub fn disk_max_of_two<R: RngCore + ?Sized>(rng: &mut R) -> [f32; 2] {
    let r = unit_f32(rng).max(unit_f32(rng));
    place(rng, r)
}

#[inline]
fn place<R: RngCore + ?Sized>(rng: &mut R, r: f32) -> [f32; 2] {
    let (c, s) = random_azimuth(rng);
    let mut p = [r * c, r * s];
    clamp_to_unit_ball(&mut p);
    p
}

/// The uniform distribution on the unit disk, as a `rand` distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitDisk(pub DiskMethod);

impl Distribution<[f32; 2]> for UnitDisk {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> [f32; 2] {
        sample_disk(rng, self.0).point
    }
}
