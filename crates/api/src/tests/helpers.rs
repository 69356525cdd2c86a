// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::WorksheetRequest;

pub fn create_test_request(operation: &str) -> WorksheetRequest {
    WorksheetRequest {
        operation: String::from(operation),
        seed: 1_700_000_000_000,
        ..WorksheetRequest::default()
    }
}

pub fn create_division_request(count: f64, top_digits: i64) -> WorksheetRequest {
    WorksheetRequest {
        count,
        top_digits,
        ..create_test_request("Division")
    }
}
