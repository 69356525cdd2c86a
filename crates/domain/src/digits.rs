// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decimal digit helpers shared by generation and grid building.

use serde::{Deserialize, Serialize};

/// The widest operand a worksheet may request, in decimal digits.
///
/// Nine digits keeps `divisor * quotient` well inside `u64`.
pub const MAX_DIGITS: u32 = 9;

/// An inclusive range of operand values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitRange {
    min: u64,
    max: u64,
}

impl DigitRange {
    /// Creates a range from explicit bounds.
    ///
    /// Bounds are stored as given; callers check `is_inverted` before sampling.
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Returns the range of integers with exactly `digits` decimal digits.
    ///
    /// `digits` is clamped into `1..=MAX_DIGITS`, so a width of one yields
    /// `[1, 9]` and the lower bound is never zero.
    #[must_use]
    pub const fn for_digits(digits: u32) -> Self {
        let width: u32 = clamp_digits(digits);
        Self {
            min: 10_u64.pow(width - 1),
            max: 10_u64.pow(width) - 1,
        }
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Returns whether the lower bound exceeds the upper bound.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Returns whether `value` lies inside the range.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Clamps a digit count into `1..=MAX_DIGITS`.
#[must_use]
pub const fn clamp_digits(digits: u32) -> u32 {
    if digits < 1 {
        1
    } else if digits > MAX_DIGITS {
        MAX_DIGITS
    } else {
        digits
    }
}

/// Returns the number of decimal digits in `value` (zero has one digit).
#[must_use]
pub const fn digit_count(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Splits `value` into its decimal digits, most significant first.
#[must_use]
pub fn digits_of(value: u64) -> Vec<u8> {
    value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}
