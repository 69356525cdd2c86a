// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use mathgrid_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// Only malformed input reaches the caller as an error. Settings that are
/// well-formed but inconsistent are resolved during generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error naming the offending field.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    let field: &str = match err {
        DomainError::InvalidOperation(_) => "operation",
        DomainError::InvalidGridSize(_) => "grid_size",
        DomainError::InvalidDigitCount { field, .. } => *field,
        DomainError::InvalidFactFamilyNumber(_) => "selected_numbers",
    };

    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(&err)
    }
}
