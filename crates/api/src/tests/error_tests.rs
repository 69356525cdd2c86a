// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_domain_error};
use mathgrid_domain::DomainError;

#[test]
fn test_domain_errors_name_their_field() {
    let err: ApiError = translate_domain_error(&DomainError::InvalidOperation(String::from("pow")));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "operation"));

    let err: ApiError = translate_domain_error(&DomainError::InvalidDigitCount {
        field: "bottom_digits",
        digits: 12,
    });
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "bottom_digits"));

    let err: ApiError = DomainError::InvalidFactFamilyNumber(-4).into();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "selected_numbers"));
}

#[test]
fn test_api_error_display() {
    let err: ApiError = translate_domain_error(&DomainError::InvalidGridSize(String::from("xl")));
    assert_eq!(
        err.to_string(),
        "Invalid input for grid_size: Invalid grid size 'xl'. Expected sm, md or lg"
    );
}
