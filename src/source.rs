//! Buffered 32-bit uniform source.
//!
//! A [`BufferedSource`] owns a fixed-size block of raw `u32` words and a read
//! cursor. Reads walk the block in order; when the cursor reaches the end, the
//! whole block is regenerated by the engine before the next value is handed
//! out. Everything about consuming bits lives here, so an engine only has to
//! know how to overwrite a slice ([`Refill`]).
//!
//! Refilling in batches keeps the engine's state in registers for a tight loop
//! and amortises the per-call overhead across `capacity` reads.
//!
//! The source also implements [`rand::RngCore`], so it can drive anything in
//! the `rand` ecosystem, and every sampler in this crate accepts any
//! `RngCore` (a `ChaCha8Rng` in tests, a stub engine in unit tests, or this
//! buffered source in production).

use std::num::NonZeroUsize;

use rand::rand_core::impls;
use rand::RngCore;

/// A producer of raw 32-bit words, filled a block at a time.
pub trait Refill {
    /// Overwrite every slot of `buf`, in order, with fresh output.
    fn refill(&mut self, buf: &mut [u32]);
}

impl<E: Refill + ?Sized> Refill for Box<E> {
    #[inline]
    fn refill(&mut self, buf: &mut [u32]) {
        (**self).refill(buf)
    }
}

impl<E: Refill + ?Sized> Refill for &mut E {
    #[inline]
    fn refill(&mut self, buf: &mut [u32]) {
        (**self).refill(buf)
    }
}

/// `2^-32`: maps a `u32` onto `[0, 1)` in steps of one ulp of the word.
const U32_TO_UNIT: f32 = 1.0 / 4_294_967_296.0;

/// Largest `f32` strictly below one.
const MAX_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Map a raw word onto `[0, 1)`.
///
/// `u as f32` rounds to 24 significant bits, which carries the top 128 words
/// up to `2^32` (and the product to exactly `1.0`); those are clamped back to
/// the largest value below one.
#[inline]
pub fn u32_to_unit_f32(u: u32) -> f32 {
    (u as f32 * U32_TO_UNIT).min(MAX_BELOW_ONE)
}

/// Draw a uniform `f32` in `[0, 1)` from any 32-bit source.
#[inline]
pub fn unit_f32<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    u32_to_unit_f32(rng.next_u32())
}

/// A fixed-capacity buffer of raw words in front of a [`Refill`] engine.
///
/// The cursor starts exhausted, so the first read triggers the first refill.
/// The buffer never grows or shrinks after construction.
#[derive(Debug, Clone)]
pub struct BufferedSource<E> {
    engine: E,
    buffer: Box<[u32]>,
    index: usize,
}

impl<E: Refill> BufferedSource<E> {
    /// Wrap `engine` behind a buffer of `capacity` words.
    pub fn new(engine: E, capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            engine,
            buffer: vec![0; capacity].into_boxed_slice(),
            index: capacity,
        }
    }

    /// Next raw word; refills the whole buffer first if it is exhausted.
    #[inline]
    pub fn uniform_u32(&mut self) -> u32 {
        if self.index == self.buffer.len() {
            self.engine.refill(&mut self.buffer);
            self.index = 0;
        }
        let value = self.buffer[self.index];
        self.index += 1;
        value
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn uniform_f32(&mut self) -> f32 {
        u32_to_unit_f32(self.uniform_u32())
    }

    /// Number of words produced per refill.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Words left before the next refill.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.index
    }

    /// The engine behind the buffer.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: Refill> RngCore for BufferedSource<E> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.uniform_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
