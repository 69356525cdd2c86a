// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::digits::MAX_DIGITS;

/// Errors raised when a worksheet configuration is malformed.
///
/// Logically inconsistent but well-typed settings (inverted ranges, empty
/// fact-family pools) are not errors; generation resolves them with fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The operation name is not one of the four supported operations.
    InvalidOperation(String),
    /// The grid size name is not recognized.
    InvalidGridSize(String),
    /// A digit count is outside `1..=MAX_DIGITS`.
    InvalidDigitCount {
        /// The configuration field that carried the value.
        field: &'static str,
        /// The rejected digit count.
        digits: i64,
    },
    /// A fact-family number is negative.
    InvalidFactFamilyNumber(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperation(name) => write!(
                f,
                "Invalid operation '{name}'. Expected Addition, Subtraction, Multiplication or Division"
            ),
            Self::InvalidGridSize(name) => {
                write!(f, "Invalid grid size '{name}'. Expected sm, md or lg")
            }
            Self::InvalidDigitCount { field, digits } => write!(
                f,
                "Invalid digit count for {field}: {digits}. Must be between 1 and {MAX_DIGITS}"
            ),
            Self::InvalidFactFamilyNumber(value) => write!(
                f,
                "Invalid fact family number: {value}. Must not be negative"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
