//! RNG module - rod generation
//!
//! Every rod the session offers comes from a [`RodSource`]. Lengths are drawn
//! uniformly from `MIN_ROD_LENGTH..=MAX_ROD_LENGTH`.
//!
//! Two sources ship with the crate:
//!
//! - [`RandomRods`]: ChaCha8-backed, seedable for reproducible games
//! - [`ScriptedRods`]: replays a fixed list of lengths, for tests and benchmarks

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::EngineError;
use crate::rod::Rod;
use crate::types::{MAX_ROD_LENGTH, MIN_ROD_LENGTH};

/// Something that can hand out a fresh rod.
pub trait RodSource {
    fn draw(&mut self) -> Rod;
}

impl<S: RodSource + ?Sized> RodSource for Box<S> {
    fn draw(&mut self) -> Rod {
        (**self).draw()
    }
}

impl<S: RodSource + ?Sized> RodSource for &mut S {
    fn draw(&mut self) -> Rod {
        (**self).draw()
    }
}

/// Uniform random rods.
#[derive(Debug, Clone)]
pub struct RandomRods {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RandomRods {
    /// Deterministic source: the same seed yields the same lengths.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy. The chosen seed is still reported by [`Self::seed`].
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next length without minting a rod.
    pub fn next_length(&mut self) -> u32 {
        self.inner.gen_range(MIN_ROD_LENGTH..=MAX_ROD_LENGTH)
    }
}

impl Default for RandomRods {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RodSource for RandomRods {
    fn draw(&mut self) -> Rod {
        Rod::fresh(self.next_length())
    }
}

/// Replays a fixed sequence of lengths, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedRods {
    lengths: Vec<u32>,
    cursor: usize,
}

impl ScriptedRods {
    pub fn new(lengths: impl IntoIterator<Item = u32>) -> Result<Self, EngineError> {
        let lengths: Vec<u32> = lengths.into_iter().collect();
        if lengths.is_empty() {
            return Err(EngineError::EmptyRodScript);
        }
        if let Some(&length) = lengths
            .iter()
            .find(|l| !(MIN_ROD_LENGTH..=MAX_ROD_LENGTH).contains(*l))
        {
            return Err(EngineError::InvalidRodLength { length });
        }
        Ok(Self { lengths, cursor: 0 })
    }

    /// Number of rods drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    /// Length the next draw will produce.
    pub fn peek(&self) -> u32 {
        self.lengths[self.cursor % self.lengths.len()]
    }
}

impl RodSource for ScriptedRods {
    fn draw(&mut self) -> Rod {
        let length = self.peek();
        self.cursor += 1;
        Rod::fresh(length)
    }
}
