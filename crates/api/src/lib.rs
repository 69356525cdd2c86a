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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult, translate_domain_error};
pub use handlers::{
    MAX_PROBLEM_COUNT, build_config, generate_word_problem, generate_worksheet,
    to_worksheet_response,
};
pub use request_response::{
    PageResponse, ProblemResponse, WordProblemResponse, WorksheetRequest, WorksheetResponse,
};
