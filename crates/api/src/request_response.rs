// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use mathgrid::{LayoutPlan, ProblemGrid};
use mathgrid_domain::{GridSize, Operation, STANDARD_FACT_FAMILY_MAX};
use serde::{Deserialize, Serialize};

/// API request describing a worksheet, as sent by a settings surface.
///
/// This DTO is deliberately loose: numbers arrive as JSON numbers and names
/// as strings. `build_config` turns it into a validated `WorksheetConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct WorksheetRequest {
    /// Operation name (e.g., "Division").
    pub operation: String,
    /// Requested number of problems. Negative values produce none and
    /// fractional values are floored.
    pub count: f64,
    /// Digit width of the top operand (dividend).
    pub top_digits: i64,
    /// Whether `top_min`/`top_max` apply.
    pub use_custom_top_range: bool,
    /// Inclusive lower bound for the top operand.
    pub top_min: Option<i64>,
    /// Inclusive upper bound for the top operand.
    pub top_max: Option<i64>,
    /// Digit width of the bottom operand (divisor).
    pub bottom_digits: i64,
    /// Whether bottom operands come from `selected_numbers`.
    pub use_fact_families: bool,
    /// Fact-family pool.
    pub selected_numbers: Vec<i64>,
    /// Division only: whether remainders are allowed.
    pub allow_remainders: bool,
    /// Grid size name ("sm", "md" or "lg").
    pub grid_size: String,
    /// Regeneration seed.
    pub seed: u64,
}

impl Default for WorksheetRequest {
    fn default() -> Self {
        Self {
            operation: Operation::default().to_string(),
            count: 12.0,
            top_digits: 2,
            use_custom_top_range: false,
            top_min: None,
            top_max: None,
            bottom_digits: 2,
            use_fact_families: false,
            selected_numbers: (0..=i64::try_from(STANDARD_FACT_FAMILY_MAX).unwrap_or(12)).collect(),
            allow_remainders: false,
            grid_size: GridSize::default().to_string(),
            seed: 0,
        }
    }
}

/// One problem on a worksheet page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResponse {
    /// Batch-unique problem id.
    pub id: String,
    /// Worksheet-wide, 1-based problem number.
    pub number: usize,
    /// The operation.
    pub operation: Operation,
    /// Top operand (dividend).
    pub top: u64,
    /// Bottom operand (divisor).
    pub bottom: u64,
    /// The cells a renderer draws for this problem.
    pub grid: ProblemGrid,
}

/// One printed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// 1-based page number.
    pub page_number: usize,
    /// The problems on the page, in order.
    pub problems: Vec<ProblemResponse>,
}

/// API response for a generated worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetResponse {
    /// The seed the worksheet was generated for.
    pub seed: u64,
    /// The operation practiced.
    pub operation: Operation,
    /// Renderer cell size hint.
    pub grid_size: GridSize,
    /// Page grid and capacity.
    pub layout: LayoutPlan,
    /// Total number of problems.
    pub problem_count: usize,
    /// Number of pages.
    pub page_count: usize,
    /// The pages, in order.
    pub pages: Vec<PageResponse>,
    /// Footer printed on each page.
    pub footer: String,
}

/// API response for a single word problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProblemResponse {
    /// The operation the problem practices.
    pub operation: Operation,
    /// The phrased problem.
    pub text: String,
}
