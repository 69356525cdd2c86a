// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidOperation(String::from("modulo"));
    assert_eq!(
        format!("{err}"),
        "Invalid operation 'modulo'. Expected Addition, Subtraction, Multiplication or Division"
    );

    let err: DomainError = DomainError::InvalidGridSize(String::from("xl"));
    assert_eq!(
        format!("{err}"),
        "Invalid grid size 'xl'. Expected sm, md or lg"
    );

    let err: DomainError = DomainError::InvalidDigitCount {
        field: "top_digits",
        digits: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid digit count for top_digits: 0. Must be between 1 and 9"
    );

    let err: DomainError = DomainError::InvalidFactFamilyNumber(-3);
    assert_eq!(
        format!("{err}"),
        "Invalid fact family number: -3. Must not be negative"
    );
}
