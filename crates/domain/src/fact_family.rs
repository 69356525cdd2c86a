// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fact-family number pools.
//!
//! A fact family is the set of small numbers a student is drilling, usually
//! the times tables 0 through 12. The pool is kept sorted and free of
//! duplicates so it can be displayed directly; generation treats it as an
//! unordered bag to sample from.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The highest number in the standard times-table pool.
pub const STANDARD_FACT_FAMILY_MAX: u64 = 12;

/// A sorted, de-duplicated pool of fact-family numbers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct FactFamilyPool {
    numbers: Vec<u64>,
}

impl FactFamilyPool {
    /// Creates a pool from arbitrary numbers, sorting and removing duplicates.
    #[must_use]
    pub fn new(numbers: impl IntoIterator<Item = u64>) -> Self {
        let mut numbers: Vec<u64> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self { numbers }
    }

    /// Creates the standard pool `0..=12`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(0..=STANDARD_FACT_FAMILY_MAX)
    }

    /// Creates a pool from signed input, as typed into a settings form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFactFamilyNumber` for the first negative value.
    pub fn from_signed(numbers: &[i64]) -> Result<Self, DomainError> {
        let mut converted: Vec<u64> = Vec::with_capacity(numbers.len());
        for &value in numbers {
            let number: u64 =
                u64::try_from(value).map_err(|_| DomainError::InvalidFactFamilyNumber(value))?;
            converted.push(number);
        }
        Ok(Self::new(converted))
    }

    /// Returns the pool's numbers in ascending order.
    #[must_use]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// Returns whether the pool has no numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns the number of distinct numbers in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns whether `number` is in the pool.
    #[must_use]
    pub fn contains(&self, number: u64) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    /// Returns the pool members usable as divisors (everything except zero).
    #[must_use]
    pub fn nonzero(&self) -> &[u64] {
        match self.numbers.first() {
            Some(0) => &self.numbers[1..],
            _ => &self.numbers,
        }
    }

    /// Adds `number` if absent, removes it if present.
    pub fn toggle(&mut self, number: u64) {
        match self.numbers.binary_search(&number) {
            Ok(index) => {
                self.numbers.remove(index);
            }
            Err(index) => self.numbers.insert(index, number),
        }
    }

    /// Adds a custom number, keeping the pool sorted.
    ///
    /// Returns `false` if the number was already present.
    pub fn insert(&mut self, number: u64) -> bool {
        match self.numbers.binary_search(&number) {
            Ok(_) => false,
            Err(index) => {
                self.numbers.insert(index, number);
                true
            }
        }
    }

    /// Removes every number from the pool.
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Replaces the pool with the standard `0..=12` pool.
    pub fn reset_to_standard(&mut self) {
        *self = Self::standard();
    }

    /// Returns the custom numbers beyond the standard times-table range.
    pub fn custom_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.numbers
            .iter()
            .copied()
            .filter(|&n| n > STANDARD_FACT_FAMILY_MAX)
    }
}

impl From<Vec<u64>> for FactFamilyPool {
    fn from(numbers: Vec<u64>) -> Self {
        Self::new(numbers)
    }
}

impl From<FactFamilyPool> for Vec<u64> {
    fn from(pool: FactFamilyPool) -> Self {
        pool.numbers
    }
}
