// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injectable randomness.
//!
//! Generation never reaches for a global generator. Every entry point takes a
//! `RandomSource`, so tests can script exact picks and hosts can choose
//! between a seeded, reproducible source and the thread-local generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{RngExt, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `[min, max]`.
    ///
    /// Callers guarantee `min <= max`.
    fn pick_inclusive(&mut self, min: u64, max: u64) -> u64;

    /// Returns an index into a collection of `len` elements.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let last: u64 = u64::try_from(len.saturating_sub(1)).unwrap_or(u64::MAX);
        usize::try_from(self.pick_inclusive(0, last)).unwrap_or(0)
    }
}

/// A `RandomSource` backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    rng: R,
}

impl<R> RandSource<R> {
    /// Wraps an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandSource<StdRng> {
    /// Creates a reproducible source; equal seeds yield equal worksheets.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RandSource<ThreadRng> {
    /// Creates a source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: RngExt> RandomSource for RandSource<R> {
    fn pick_inclusive(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}
