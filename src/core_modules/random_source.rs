// THEORY:
// Two fields of a result are not derived from pixels at all: the estimated item
// count and the remaining-quantity percentage are bounded random draws. To keep
// the rest of the engine deterministic and testable, every draw goes through the
// `RandomSource` trait instead of touching a global generator.
//
// - `StdRng` from `seeded(seed)` gives reproducible runs.
// - `StdRng` from `from_entropy()` is what the runner and the batch pool use
//   when no seed is given.
// - `ReplaySource` plays back a fixed script, for pinning exact outputs.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

/// Injectable source of bounded integer draws.
pub trait RandomSource {
    /// Uniform draw from `range`. Implementations must return a value inside it.
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

impl RandomSource for StdRng {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range(range)
    }
}

/// Reproducible generator for a given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Plays back a fixed list of values in order, cycling when exhausted. Each value
/// is clamped into the requested range.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<u32>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplaySource {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (low, high) = (*range.start(), *range.end());
        let value = if self.values.is_empty() {
            low
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value.clamp(low, high)
    }
}
