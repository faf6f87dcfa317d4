//! `tama`: uniform points in unit balls, from a buffered xoshiro256+ source.
//!
//! Two layers:
//!
//! - A fast, seedable, single-stream uniform source: [`BufferedSource`] keeps a
//!   block of raw words and refills it in one pass of the [`Xoshiro256Plus`]
//!   engine when exhausted. [`default_generator`] numbers streams by a
//!   `sequence` offset so separate callers get independent, reproducible
//!   streams.
//! - Exact samplers for the unit disk, ball and 12-ball, each in a rejection
//!   form and one or two closed forms. Rejection collapses with dimension
//!   (acceptance `pi/4`, `pi/6`, then about `3.3e-4` in 12-D); the
//!   order-statistics method samples the 12-ball with no rejection at all.
//!
//! Exposed modules:
//! - `source`: buffered source and the [`Refill`] engine seam.
//! - `xoshiro`: the xoshiro256+ engine.
//! - `config`: seeding and buffer-size configuration.
//! - `azimuth`: trig-free random directions in the plane.
//! - `disk`, `ball`, `hyperball`: the samplers.
//! - `stats`: per-draw results and run statistics.
//!
//! Samplers take any `R: RngCore + ?Sized` and borrow it for one draw only.
//! None of the types here are shared across threads; give each thread its own
//! generator with its own `sequence`.
//!
//! ```
//! use tama::{default_generator, sample_disk, DiskMethod};
//!
//! let mut rng = default_generator(0);
//! let s = sample_disk(&mut rng, DiskMethod::Rejection);
//! let [x, y] = s.point;
//! assert!(x * x + y * y <= 1.0);
//! ```

#![forbid(unsafe_code)]

pub mod azimuth;
pub mod ball;
pub mod config;
pub mod disk;
pub mod hyperball;
pub mod source;
pub mod stats;
pub mod xoshiro;

pub use azimuth::{random_azimuth, AZIMUTH_ACCEPTANCE};
pub use ball::{sample_ball, BallMethod, UnitBall, BALL_ACCEPTANCE};
pub use config::{
    default_generator, ConfigError, DefaultGenerator, GeneratorConfig, BASE_SEED,
    DEFAULT_CAPACITY,
};
pub use disk::{sample_disk, DiskMethod, UnitDisk, DISK_ACCEPTANCE};
pub use hyperball::{
    order_statistic_gaps, sample_hyperball12, Hyperball12Method, UnitHyperball12,
    HYPERBALL12_ACCEPTANCE,
};
pub use source::{u32_to_unit_f32, unit_f32, BufferedSource, Refill};
pub use stats::{
    clamp_to_unit_ball, norm_squared, RunStats, Sample, BALL_MEAN_R2, DISK_MEAN_R2,
    HYPERBALL12_MEAN_R2,
};
pub use xoshiro::Xoshiro256Plus;
