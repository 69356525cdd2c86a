// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::WorksheetConfig;
use crate::digits::MAX_DIGITS;
use crate::error::DomainError;

/// Validates that a configuration's digit widths are usable.
///
/// Only type-level problems are rejected here. Inverted custom ranges and
/// empty fact-family pools are left to the generator's fallbacks.
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidDigitCount` if `top_digits` or
/// `bottom_digits` is outside `1..=MAX_DIGITS`.
pub fn validate_config(config: &WorksheetConfig) -> Result<(), DomainError> {
    validate_digit_count("top_digits", i64::from(config.top_digits))?;
    validate_digit_count("bottom_digits", i64::from(config.bottom_digits))?;
    Ok(())
}

/// Validates and converts a digit count supplied by a settings surface.
///
/// # Arguments
///
/// * `field` - The name of the field, used in the error
/// * `digits` - The raw digit count
///
/// # Errors
///
/// Returns `DomainError::InvalidDigitCount` if `digits` is outside `1..=MAX_DIGITS`.
pub fn validate_digit_count(field: &'static str, digits: i64) -> Result<u32, DomainError> {
    // Rule: at least one digit, at most MAX_DIGITS
    if !(1..=i64::from(MAX_DIGITS)).contains(&digits) {
        return Err(DomainError::InvalidDigitCount { field, digits });
    }

    u32::try_from(digits).map_err(|_| DomainError::InvalidDigitCount { field, digits })
}
