// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MAX_DIGITS, WorksheetConfig, validate_config, validate_digit_count};

#[test]
fn test_validate_config_accepts_defaults() {
    let config: WorksheetConfig = WorksheetConfig::default();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validate_config_accepts_inverted_custom_range() {
    let config: WorksheetConfig = WorksheetConfig {
        use_custom_top_range: true,
        top_min: Some(50),
        top_max: Some(10),
        ..WorksheetConfig::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validate_config_rejects_zero_top_digits() {
    let config: WorksheetConfig = WorksheetConfig {
        top_digits: 0,
        ..WorksheetConfig::default()
    };
    assert_eq!(
        validate_config(&config),
        Err(DomainError::InvalidDigitCount {
            field: "top_digits",
            digits: 0,
        })
    );
}

#[test]
fn test_validate_config_rejects_wide_bottom_digits() {
    let config: WorksheetConfig = WorksheetConfig {
        bottom_digits: MAX_DIGITS + 1,
        ..WorksheetConfig::default()
    };
    assert!(matches!(
        validate_config(&config),
        Err(DomainError::InvalidDigitCount {
            field: "bottom_digits",
            ..
        })
    ));
}

#[test]
fn test_validate_digit_count_bounds() {
    assert_eq!(validate_digit_count("top_digits", 1), Ok(1));
    assert_eq!(validate_digit_count("top_digits", 9), Ok(9));
    assert!(validate_digit_count("top_digits", -2).is_err());
    assert!(validate_digit_count("top_digits", 10).is_err());
}
