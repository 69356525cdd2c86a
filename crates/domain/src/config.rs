// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fact_family::FactFamilyPool;
use crate::types::{GridSize, Operation};
use serde::{Deserialize, Serialize};

/// Settings that drive one worksheet generation pass.
///
/// The configuration is owned by the caller and read-only during generation.
/// Any combination of well-typed values is accepted: inverted custom ranges
/// and empty fact-family pools are resolved by generation fallbacks rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct WorksheetConfig {
    /// The operation practiced on every problem.
    pub operation: Operation,
    /// The number of problems to generate.
    pub count: usize,
    /// Digit width of the top operand (dividend for division).
    pub top_digits: u32,
    /// Whether `top_min`/`top_max` narrow the top operand range.
    pub use_custom_top_range: bool,
    /// Inclusive lower bound for the top operand.
    pub top_min: Option<u64>,
    /// Inclusive upper bound for the top operand.
    pub top_max: Option<u64>,
    /// Digit width of the bottom operand (divisor for division).
    pub bottom_digits: u32,
    /// Whether the bottom operand is drawn from `selected_numbers`.
    pub use_fact_families: bool,
    /// The fact-family pool.
    pub selected_numbers: FactFamilyPool,
    /// Division only: whether problems may leave a remainder.
    pub allow_remainders: bool,
    /// Cell size hint for renderers.
    pub grid_size: GridSize,
    /// Regeneration signal; also the prefix of every problem id.
    pub seed: u64,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            operation: Operation::Addition,
            count: 12,
            top_digits: 2,
            use_custom_top_range: false,
            top_min: None,
            top_max: None,
            bottom_digits: 2,
            use_fact_families: false,
            selected_numbers: FactFamilyPool::standard(),
            allow_remainders: false,
            grid_size: GridSize::Medium,
            seed: 0,
        }
    }
}

impl WorksheetConfig {
    /// Returns the top-operand bounds that apply, if the custom range is on.
    #[must_use]
    pub const fn top_overrides(&self) -> (Option<u64>, Option<u64>) {
        if self.use_custom_top_range {
            (self.top_min, self.top_max)
        } else {
            (None, None)
        }
    }

    /// Returns the pool to draw bottom operands from, if fact families apply.
    ///
    /// An enabled but empty pool counts as disabled.
    #[must_use]
    pub fn active_fact_pool(&self) -> Option<&FactFamilyPool> {
        if self.use_fact_families && !self.selected_numbers.is_empty() {
            Some(&self.selected_numbers)
        } else {
            None
        }
    }

    /// Returns a copy of this configuration producing a single problem.
    #[must_use]
    pub fn single(&self) -> Self {
        Self {
            count: 1,
            ..self.clone()
        }
    }
}
