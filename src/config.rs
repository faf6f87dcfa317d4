//! Generator construction.
//!
//! Every generator in a process starts from [`BASE_SEED`] offset by a
//! `sequence` number, so independently numbered streams come from unrelated
//! engine states while staying reproducible run to run.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::source::BufferedSource;
use crate::xoshiro::Xoshiro256Plus;

/// Seed of sequence 0.
pub const BASE_SEED: u32 = 5489;

/// Words per refill unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 256;

const DEFAULT_CAPACITY_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(n) => n,
    None => panic!("DEFAULT_CAPACITY must be non-zero"),
};

/// The buffered xoshiro256+ source handed out by [`default_generator`].
pub type DefaultGenerator = BufferedSource<Xoshiro256Plus>;

/// Rejected generator configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A buffer must hold at least one word.
    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,
    /// Capacities are 32-bit quantities.
    #[error("buffer capacity {0} exceeds u32::MAX")]
    CapacityTooLarge(usize),
}

/// Seed offset and buffer size for a [`DefaultGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Offset added to [`BASE_SEED`]. Distinct values give independent streams.
    pub sequence: u32,
    /// Words produced per refill.
    pub capacity: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    /// Sequence 0, capacity [`DEFAULT_CAPACITY`].
    pub const fn new() -> Self {
        Self {
            sequence: 0,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the stream number.
    pub const fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set the buffer size.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Engine seed for this stream (`BASE_SEED + sequence`, wrapping).
    pub const fn seed(&self) -> u32 {
        BASE_SEED.wrapping_add(self.sequence)
    }

    /// Check the capacity without building anything.
    pub fn validate(&self) -> Result<NonZeroUsize, ConfigError> {
        if self.capacity > u32::MAX as usize {
            return Err(ConfigError::CapacityTooLarge(self.capacity));
        }
        NonZeroUsize::new(self.capacity).ok_or(ConfigError::ZeroCapacity)
    }

    /// Build the generator.
    pub fn build(&self) -> Result<DefaultGenerator, ConfigError> {
        let capacity = self.validate().inspect_err(|err| {
            tracing::warn!(
                sequence = self.sequence,
                capacity = self.capacity,
                %err,
                "rejected generator config"
            );
        })?;
        tracing::debug!(
            seed = self.seed(),
            sequence = self.sequence,
            capacity = capacity.get(),
            "building xoshiro256+ generator"
        );
        Ok(BufferedSource::new(Xoshiro256Plus::new(self.seed()), capacity))
    }
}

/// Generator for stream `sequence` with a [`DEFAULT_CAPACITY`]-word buffer.
///
/// Same `sequence`, same infinite sequence of values.
pub fn default_generator(sequence: u32) -> DefaultGenerator {
    let seed = BASE_SEED.wrapping_add(sequence);
    tracing::debug!(
        seed,
        sequence,
        capacity = DEFAULT_CAPACITY,
        "building default generator"
    );
    BufferedSource::new(Xoshiro256Plus::new(seed), DEFAULT_CAPACITY_NZ)
}
