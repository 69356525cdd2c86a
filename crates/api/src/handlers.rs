// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiResult;
use crate::request_response::{
    PageResponse, ProblemResponse, WordProblemResponse, WorksheetRequest, WorksheetResponse,
};
use mathgrid::{Page, ProblemGrid, RandomSource, Worksheet, build_worksheet, phrase_word_problem};
use mathgrid_domain::{
    FactFamilyPool, GridSize, Operation, WorksheetConfig, validate_config, validate_digit_count,
};
use tracing::{info, warn};

/// The largest worksheet a single request may generate.
pub const MAX_PROBLEM_COUNT: usize = 500;

/// Converts a worksheet request into a validated configuration.
///
/// Malformed values are rejected; out-of-range counts and negative bounds
/// are clamped.
///
/// # Arguments
///
/// * `request` - The API request describing the worksheet
///
/// # Returns
///
/// * `Ok(WorksheetConfig)` ready for generation
/// * `Err(ApiError)` if a field cannot be interpreted
///
/// # Errors
///
/// Returns an error if:
/// - The operation or grid size name is unknown
/// - A digit count is outside the supported range
/// - A fact-family number is negative
pub fn build_config(request: &WorksheetRequest) -> ApiResult<WorksheetConfig> {
    let operation: Operation = request.operation.parse()?;
    let grid_size: GridSize = request.grid_size.parse()?;
    let top_digits: u32 = validate_digit_count("top_digits", request.top_digits)?;
    let bottom_digits: u32 = validate_digit_count("bottom_digits", request.bottom_digits)?;
    let selected_numbers: FactFamilyPool = FactFamilyPool::from_signed(&request.selected_numbers)?;

    let config: WorksheetConfig = WorksheetConfig {
        operation,
        count: clamp_count(request.count),
        top_digits,
        use_custom_top_range: request.use_custom_top_range,
        top_min: request.top_min.map(|value| clamp_bound("top_min", value)),
        top_max: request.top_max.map(|value| clamp_bound("top_max", value)),
        bottom_digits,
        use_fact_families: request.use_fact_families,
        selected_numbers,
        allow_remainders: request.allow_remainders,
        grid_size,
        seed: request.seed,
    };

    validate_config(&config)?;

    Ok(config)
}

/// Generates a worksheet via the API boundary.
///
/// # Arguments
///
/// * `request` - The API request describing the worksheet
/// * `rng` - The random source for operand generation
///
/// # Errors
///
/// Returns an error if the request cannot be converted into a configuration.
pub fn generate_worksheet<R: RandomSource + ?Sized>(
    request: &WorksheetRequest,
    rng: &mut R,
) -> ApiResult<WorksheetResponse> {
    let config: WorksheetConfig = build_config(request)?;
    let worksheet: Worksheet = build_worksheet(&config, rng);

    info!(
        operation = %config.operation,
        problems = worksheet.problems().len(),
        pages = worksheet.page_count(),
        seed = config.seed,
        "Generated worksheet"
    );

    Ok(to_worksheet_response(&worksheet))
}

/// Generates a single word problem via the API boundary.
///
/// The request's `count` is ignored.
///
/// # Errors
///
/// Returns an error if the request cannot be converted into a configuration.
pub fn generate_word_problem<R: RandomSource + ?Sized>(
    request: &WorksheetRequest,
    rng: &mut R,
) -> ApiResult<WordProblemResponse> {
    let config: WorksheetConfig = build_config(request)?;
    let text: String = phrase_word_problem(&config, rng);

    info!(operation = %config.operation, "Generated word problem");

    Ok(WordProblemResponse {
        operation: config.operation,
        text,
    })
}

/// Converts a worksheet into its response DTO.
#[must_use]
pub fn to_worksheet_response(worksheet: &Worksheet) -> WorksheetResponse {
    let pages: Vec<PageResponse> = worksheet
        .pages()
        .iter()
        .map(to_page_response)
        .collect();

    WorksheetResponse {
        seed: worksheet.seed(),
        operation: worksheet.operation(),
        grid_size: worksheet.grid_size(),
        layout: worksheet.layout(),
        problem_count: worksheet.problems().len(),
        page_count: pages.len(),
        pages,
        footer: worksheet.footer(),
    }
}

fn to_page_response(page: &Page<'_>) -> PageResponse {
    PageResponse {
        page_number: page.number(),
        problems: page
            .numbered()
            .map(|(number, problem)| ProblemResponse {
                id: problem.id().to_string(),
                number,
                operation: problem.operation(),
                top: problem.top(),
                bottom: problem.bottom(),
                grid: ProblemGrid::from_problem(problem),
            })
            .collect(),
    }
}

/// Clamps a requested count into `0..=MAX_PROBLEM_COUNT`, flooring fractions.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn clamp_count(count: f64) -> usize {
    if count.is_nan() || count < 0.0 {
        warn!(count, "Problem count out of range, generating none");
        return 0;
    }

    let whole: f64 = count.floor();
    if whole > MAX_PROBLEM_COUNT as f64 {
        warn!(count, max = MAX_PROBLEM_COUNT, "Problem count capped");
        return MAX_PROBLEM_COUNT;
    }

    // Safe cast: whole is finite, non-negative and at most MAX_PROBLEM_COUNT
    whole as usize
}

fn clamp_bound(field: &'static str, value: i64) -> u64 {
    u64::try_from(value).unwrap_or_else(|_| {
        warn!(field, value, "Negative range bound clamped to zero");
        0
    })
}
