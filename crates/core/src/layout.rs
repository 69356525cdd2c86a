// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page capacity planning.
//!
//! Long division and wide multiplication need vertical room for working, so
//! fewer of them fit on a printed page.
//!
//! | Condition                          | Grid | Per page |
//! |------------------------------------|------|----------|
//! | Division, `top_digits >= 4`        | 2×3  | 6        |
//! | Division, `top_digits < 4`         | 2×4  | 8        |
//! | Multiplication, `bottom_digits >= 3` | 2×4 | 8       |
//! | Multiplication, `bottom_digits == 2` | 3×3 | 9       |
//! | Everything else                    | 4×4  | 16       |

use mathgrid_domain::{Operation, WorksheetConfig};
use serde::Serialize;

/// How many problems fit on one page, and in what grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    columns: usize,
    rows: usize,
    per_page: usize,
}

impl LayoutPlan {
    /// Creates a plan of `columns` by `rows` problems.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            per_page: columns * rows,
        }
    }

    /// Plans the layout for a configuration.
    ///
    /// Only the operation and digit widths matter; `count` and `seed` do not.
    #[must_use]
    pub const fn for_config(config: &WorksheetConfig) -> Self {
        plan_layout(config.operation, config.top_digits, config.bottom_digits)
    }

    /// Returns the number of problem columns per page.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of problem rows per page.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of problems per page.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the number of pages needed for `problem_count` problems.
    #[must_use]
    pub const fn page_count(&self, problem_count: usize) -> usize {
        if self.per_page == 0 {
            return problem_count;
        }
        problem_count.div_ceil(self.per_page)
    }
}

/// Chooses the page layout for an operation and its operand widths.
#[must_use]
pub const fn plan_layout(operation: Operation, top_digits: u32, bottom_digits: u32) -> LayoutPlan {
    match operation {
        Operation::Division if top_digits >= 4 => LayoutPlan::new(2, 3),
        Operation::Division => LayoutPlan::new(2, 4),
        Operation::Multiplication if bottom_digits >= 3 => LayoutPlan::new(2, 4),
        Operation::Multiplication if bottom_digits == 2 => LayoutPlan::new(3, 3),
        _ => LayoutPlan::new(4, 4),
    }
}
