//! Draw results and run statistics.
//!
//! The mean squared radius is the correctness check for every sampler: a
//! uniform point in the unit `d`-ball has `E[r^2] = d / (d + 2)`, so a
//! sampler that is uniform over its bounding box instead of the ball, or that
//! piles mass at the centre, shows up immediately in this one number.

/// Exact `E[r^2]` for a uniform point in the unit disk.
pub const DISK_MEAN_R2: f64 = 0.5;

/// Exact `E[r^2]` for a uniform point in the unit ball.
pub const BALL_MEAN_R2: f64 = 0.6;

/// Exact `E[r^2]` for a uniform point in the unit 12-ball.
pub const HYPERBALL12_MEAN_R2: f64 = 12.0 / 14.0;

/// One drawn point and how many raw trials it took.
///
/// Closed-form samplers always report a single attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<P> {
    /// The point.
    pub point: P,
    /// Trials until acceptance (`>= 1`).
    pub attempts: u32,
}

impl<P> Sample<P> {
    /// A point produced without rejection.
    #[inline]
    pub fn direct(point: P) -> Self {
        Self { point, attempts: 1 }
    }
}

/// Sum of squared coordinates, accumulated left to right.
#[inline]
pub fn norm_squared(p: &[f32]) -> f32 {
    p.iter().fold(0.0, |acc, &x| acc + x * x)
}

/// `1 - 2^-23`: one multiply strictly shrinks any normal `f32` magnitude.
const SHRINK: f32 = 1.0 - f32::EPSILON;

/// Pull a closed-form point back inside the unit ball.
///
/// A radius near one times an `f32` unit vector can land a few ulps outside.
/// Each pass shrinks every coordinate by at least one ulp, so this touches
/// only points already within rounding of the sphere.
#[inline]
pub fn clamp_to_unit_ball(p: &mut [f32]) {
    while norm_squared(p) > 1.0 {
        for x in p.iter_mut() {
            *x *= SHRINK;
        }
    }
}

/// Running totals over a batch of draws.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    samples: u64,
    attempts: u64,
    sum_r2: f64,
}

impl RunStats {
    /// Empty totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `n` samples and tally them.
    pub fn collect<P, F>(n: u64, mut draw: F) -> Self
    where
        P: AsRef<[f32]>,
        F: FnMut() -> Sample<P>,
    {
        let mut stats = Self::new();
        for _ in 0..n {
            stats.record(&draw());
        }
        stats
    }

    /// Add one sample.
    #[inline]
    pub fn record<P: AsRef<[f32]>>(&mut self, sample: &Sample<P>) {
        self.samples += 1;
        self.attempts += u64::from(sample.attempts);
        self.sum_r2 += f64::from(norm_squared(sample.point.as_ref()));
    }

    /// Samples recorded.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Raw trials across all samples.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Mean squared radius, `None` before the first sample.
    pub fn mean_r2(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.sum_r2 / self.samples as f64)
    }

    /// Accepted samples per trial, `None` before the first sample.
    pub fn efficiency(&self) -> Option<f64> {
        (self.attempts > 0).then(|| self.samples as f64 / self.attempts as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_stats_have_no_mean() {
        let stats = RunStats::new();
        assert_eq!(stats.samples(), 0);
        assert_eq!(stats.mean_r2(), None);
        assert_eq!(stats.efficiency(), None);
    }

    #[test]
    fn record_tallies() {
        let mut stats = RunStats::new();
        stats.record(&Sample {
            point: [0.6f32, 0.8],
            attempts: 3,
        });
        stats.record(&Sample::direct([0.0f32, 0.0]));
        assert_eq!(stats.samples(), 2);
        assert_eq!(stats.attempts(), 4);
        assert_abs_diff_eq!(stats.mean_r2().expect("non-empty"), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.efficiency().expect("non-empty"), 0.5);
    }

    #[test]
    fn collect_calls_draw_n_times() {
        let mut calls = 0;
        let stats = RunStats::collect(7, || {
            calls += 1;
            Sample::direct([1.0f32; 12])
        });
        assert_eq!(calls, 7);
        assert_eq!(stats.samples(), 7);
        assert_abs_diff_eq!(stats.mean_r2().expect("non-empty"), 12.0);
    }

    #[test]
    fn clamp_leaves_interior_points_alone() {
        let mut q = [0.5f32, -0.5, 0.25];
        clamp_to_unit_ball(&mut q);
        assert_eq!(q, [0.5, -0.5, 0.25]);
    }

    #[test]
    fn clamp_pulls_rounded_points_inside() {
        // The worst cases seen in practice: radius one on a direction whose
        // computed length is a few ulps long.
        let mut disk = [1.0f32, 1e-3];
        clamp_to_unit_ball(&mut disk);
        assert!(norm_squared(&disk) <= 1.0);

        let mut ball = [-0.480_950_18f32, 0.820_342_8, 0.309_394_24];
        clamp_to_unit_ball(&mut ball);
        assert!(norm_squared(&ball) <= 1.0);
        assert_abs_diff_eq!(norm_squared(&ball), 1.0, epsilon = 1e-6);

        let mut wide = [0.2887f32; 12];
        clamp_to_unit_ball(&mut wide);
        assert!(norm_squared(&wide) <= 1.0);
    }

    #[test]
    fn norm_squared_sums_in_order() {
        assert_eq!(norm_squared(&[]), 0.0);
        assert_eq!(norm_squared(&[3.0, 4.0]), 25.0);
        assert_eq!(norm_squared(&[0.5; 4]), 1.0);
    }
}
