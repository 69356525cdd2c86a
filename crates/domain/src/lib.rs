// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod digits;
mod error;
mod fact_family;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use config::WorksheetConfig;
pub use digits::{DigitRange, MAX_DIGITS, clamp_digits, digit_count, digits_of};
pub use error::DomainError;
pub use fact_family::{FactFamilyPool, STANDARD_FACT_FAMILY_MAX};
pub use types::{GridSize, Operation, Problem, ProblemId};
pub use validation::{validate_config, validate_digit_count};
