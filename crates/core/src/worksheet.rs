// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::generator::generate_problems;
use crate::layout::LayoutPlan;
use crate::pagination::{Page, paginate};
use crate::random::RandomSource;
use mathgrid_domain::{GridSize, Operation, Problem, WorksheetConfig};
use tracing::debug;

/// A generated worksheet: its problems and how they are laid out.
///
/// A worksheet is never updated in place. Changing any setting means
/// building a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    seed: u64,
    operation: Operation,
    grid_size: GridSize,
    layout: LayoutPlan,
    problems: Vec<Problem>,
}

impl Worksheet {
    /// Returns the seed the worksheet was generated for.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the operation practiced.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the renderer cell size hint.
    #[must_use]
    pub const fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Returns the page layout.
    #[must_use]
    pub const fn layout(&self) -> LayoutPlan {
        self.layout
    }

    /// Returns all problems in worksheet order.
    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Returns the problems split into pages.
    #[must_use]
    pub fn pages(&self) -> Vec<Page<'_>> {
        paginate(&self.problems, &self.layout)
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.layout.page_count(self.problems.len())
    }

    /// Returns the footer printed at the bottom of each page.
    #[must_use]
    pub fn footer(&self) -> String {
        format!("MathGrid Worksheet • {}", self.seed)
    }
}

/// Generates problems, plans the layout and assembles a worksheet.
///
/// # Arguments
///
/// * `config` - The worksheet settings
/// * `rng` - The random source used for every operand
pub fn build_worksheet<R: RandomSource + ?Sized>(
    config: &WorksheetConfig,
    rng: &mut R,
) -> Worksheet {
    let problems: Vec<Problem> = generate_problems(config, rng);
    let layout: LayoutPlan = LayoutPlan::for_config(config);

    debug!(
        problems = problems.len(),
        per_page = layout.per_page(),
        pages = layout.page_count(problems.len()),
        "Built worksheet"
    );

    Worksheet {
        seed: config.seed,
        operation: config.operation,
        grid_size: config.grid_size,
        layout,
        problems,
    }
}
