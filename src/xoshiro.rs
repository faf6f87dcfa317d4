//! Xoshiro256+ engine.
//!
//! Blackman & Vigna's xoshiro256+: four 64-bit words of state, one xor/shift/
//! rotate step per output, output `s0 + s3`. Fast and statistically solid for
//! floating-point use; not a cryptographic generator.
//!
//! The state is expanded from a small seed by running SplitMix64 four times,
//! so adjacent seeds (`5489`, `5490`, ...) land on unrelated, well-mixed
//! states instead of the mostly-zero states a direct copy would give.
//!
//! ## References
//!
//! - Blackman & Vigna (2018): *Scrambled Linear Pseudorandom Number Generators*.
//! - Steele, Lea, Flood (2014): *Fast Splittable Pseudorandom Number Generators* (SplitMix).

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

use crate::source::Refill;

/// SplitMix64, used only to expand seeds.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// The xoshiro256+ generator.
///
/// Equal state implies equal next output and equal next state; a given seed
/// always yields the same infinite sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256Plus {
    s: [u64; 4],
}

impl Xoshiro256Plus {
    /// Seed from a 32-bit value.
    pub fn new(seed: u32) -> Self {
        Self::from_splitmix(u64::from(seed))
    }

    fn from_splitmix(seed: u64) -> Self {
        let mut sm = SplitMix64(seed);
        Self {
            s: [sm.next(), sm.next(), sm.next(), sm.next()],
        }
    }

    /// Advance one step and return the 64-bit output `s0 + s3`.
    #[inline]
    pub fn step(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;
        let out = s0.wrapping_add(*s3);
        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;

        *s2 ^= t;
        *s3 = s3.rotate_left(45);

        out
    }

    /// Current internal state.
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}

impl Refill for Xoshiro256Plus {
    /// One step per slot, keeping the low 32 bits of each output.
    #[inline]
    fn refill(&mut self, buf: &mut [u32]) {
        for slot in buf {
            *slot = self.step() as u32;
        }
    }
}

impl RngCore for Xoshiro256Plus {
    /// Upper half of one output; the lowest bits of xoshiro256+ are its weakest.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xoshiro256Plus {
    type Seed = [u8; 32];

    /// Little-endian state words. The all-zero state is a fixed point of the
    /// step function, so an all-zero seed is expanded through SplitMix64.
    fn from_seed(seed: [u8; 32]) -> Self {
        if seed.iter().all(|&b| b == 0) {
            return Self::from_splitmix(0);
        }
        let mut s = [0u64; 4];
        for (word, chunk) in s.iter_mut().zip(seed.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }
        Self { s }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_splitmix(state)
    }
}
