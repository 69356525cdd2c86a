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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod generator;
mod grid;
mod layout;
mod pagination;
mod random;
mod word_problem;
mod worksheet;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use generator::{generate_problem, generate_problems, operand_range, random_in_range};
pub use grid::{
    Cell, DIVISION_BRACKET, LONG_DIVISION_WORK_ROWS, LongDivisionGrid, ProblemGrid, StackedGrid,
};
pub use layout::{LayoutPlan, plan_layout};
pub use pagination::{Page, chunk, paginate};
pub use random::{RandSource, RandomSource};
pub use word_problem::{
    NO_PROBLEM_MESSAGE, fill_template, format_grouped, phrase_problem, phrase_word_problem,
    templates,
};
pub use worksheet::{Worksheet, build_worksheet};
