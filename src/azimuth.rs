//! Random directions in the plane without trigonometry.
//!
//! Draw `(x, y)` uniformly in the upper half of the unit disk by rejection
//! from the rectangle `[-1, 1) x [0, 1)`. Its polar angle `phi` is uniform on
//! `[0, pi)`, so `2 phi` is uniform on `[0, 2 pi)`, and the double-angle
//! identities give
//!
//! ```text
//! cos 2phi = (x^2 - y^2) / r^2      sin 2phi = 2xy / r^2
//! ```
//!
//! with only multiplications and one division. This is von Neumann's trick,
//! restricted to a half disk since the angle doubling covers the full circle
//! anyway.
//!
//! ## References
//!
//! - von Neumann (1951): *Various Techniques Used in Connection with Random Digits*.

use rand::RngCore;

use crate::source::unit_f32;

/// Probability that one `(x, y)` trial is accepted: half-disk area over
/// rectangle area, `(pi / 2) / 2`.
pub const AZIMUTH_ACCEPTANCE: f64 = std::f64::consts::FRAC_PI_4;

/// Uniformly random unit vector `(cos 2phi, sin 2phi)`.
///
/// The exact origin is rejected along with points outside the half disk; it
/// has no direction and would divide by zero.
#[inline]
pub fn random_azimuth<R: RngCore + ?Sized>(rng: &mut R) -> (f32, f32) {
    loop {
        let x = 2.0 * unit_f32(rng) - 1.0;
        let y = unit_f32(rng);
        let (x2, y2) = (x * x, y * y);
        let r = x2 + y2;
        if r <= 1.0 && r > 0.0 {
            let ri = 1.0 / r;
            return ((x2 - y2) * ri, 2.0 * x * y * ri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_generator;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::TAU;

    fn angle(c: f32, s: f32) -> f64 {
        let a = f64::from(s).atan2(f64::from(c));
        if a < 0.0 {
            a + TAU
        } else {
            a
        }
    }

    fn chi2_of_angles<R: RngCore>(rng: &mut R, buckets: usize, draws: usize) -> f64 {
        let mut counts = vec![0usize; buckets];
        for _ in 0..draws {
            let (c, s) = random_azimuth(rng);
            let b = ((angle(c, s) / TAU) * buckets as f64) as usize;
            counts[b.min(buckets - 1)] += 1;
        }
        let expected = draws as f64 / buckets as f64;
        counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    #[test]
    fn unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10_000 {
            let (c, s) = random_azimuth(&mut rng);
            assert_abs_diff_eq!(c * c + s * s, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn angles_uniform_chacha() {
        // df = 63; E[chi2] = 63, sd ~ 11. Conservative cutoff.
        let chi2 = chi2_of_angles(&mut ChaCha8Rng::seed_from_u64(2), 64, 200_000);
        assert!(chi2 < 130.0, "chi2 too large: {chi2:.2}");
    }

    #[test]
    fn angles_uniform_buffered_source() {
        let chi2 = chi2_of_angles(&mut default_generator(0), 64, 200_000);
        assert!(chi2 < 130.0, "chi2 too large: {chi2:.2}");
    }

    #[test]
    fn no_bias_at_the_half_disk_edge() {
        // y = 0 maps to 2phi = 0 (x > 0) or 2phi = 2pi (x < 0): the seam at
        // angle 0. Compare the thin wedges on either side of it and of pi
        // against the interior.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let draws = 400_000;
        let width = TAU / 256.0;
        let (mut near_seam, mut near_pi) = (0usize, 0usize);
        for _ in 0..draws {
            let (c, s) = random_azimuth(&mut rng);
            let a = angle(c, s);
            if a < width || a > TAU - width {
                near_seam += 1;
            }
            if (a - std::f64::consts::PI).abs() < width {
                near_pi += 1;
            }
        }
        let expected = draws as f64 * 2.0 / 256.0;
        for count in [near_seam, near_pi] {
            let z = (count as f64 - expected) / expected.sqrt();
            assert!(z.abs() < 5.0, "wedge count {count} vs {expected:.0}");
        }
    }

    #[test]
    fn acceptance_rate_is_pi_over_four() {
        // Count u32 draws consumed: two per trial.
        struct Counting<R>(R, u64);
        impl<R: RngCore> RngCore for Counting<R> {
            fn next_u32(&mut self) -> u32 {
                self.1 += 1;
                self.0.next_u32()
            }
            fn next_u64(&mut self) -> u64 {
                self.0.next_u64()
            }
            fn fill_bytes(&mut self, dst: &mut [u8]) {
                self.0.fill_bytes(dst)
            }
        }

        let mut rng = Counting(ChaCha8Rng::seed_from_u64(4), 0);
        let n = 100_000;
        for _ in 0..n {
            random_azimuth(&mut rng);
        }
        let trials = rng.1 as f64 / 2.0;
        assert_abs_diff_eq!(n as f64 / trials, AZIMUTH_ACCEPTANCE, epsilon = 0.01);
    }
}
