// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Renderer-facing cell grids.
//!
//! A renderer draws each problem as a grid of square cells. This module
//! decides which cells exist and what they hold; how a cell looks is up to
//! the renderer.
//!
//! ## Stacked layout (addition, subtraction, multiplication)
//!
//! ```text
//!      [4][0][7]
//!   +  [ ][5][6]
//!      [_][_][_]      answer row
//!      [_][_][_][_]   partial products (multi-digit multiplication only)
//! ```
//!
//! Operands are right-aligned to a common width. The leftmost column holds
//! the operator symbol.
//!
//! ## Long division layout
//!
//! ```text
//!          [_][_][_]   quotient row
//!   [1][2] ) [1][4][4]
//!          [_][_][_]   work rows
//! ```

use mathgrid_domain::{Operation, Problem, digits_of};
use serde::Serialize;

/// Number of empty work rows drawn beneath a long-division problem.
pub const LONG_DIVISION_WORK_ROWS: usize = 5;

/// The bracket drawn between divisor and dividend.
pub const DIVISION_BRACKET: char = ')';

/// One cell of a problem grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// A printed operand digit inside a bordered cell.
    Digit(u8),
    /// An operator or bracket, drawn without a border.
    Symbol(char),
    /// A bordered cell left empty for the student to write in.
    Blank,
    /// No cell at all; keeps columns aligned.
    Spacer,
}

/// Cells for an addition, subtraction or multiplication problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackedGrid {
    /// Operator symbol drawn beside the bottom operand.
    pub symbol: char,
    /// Common digit width of both operands.
    pub width: usize,
    /// Top operand digits, right-aligned; `None` is a leading blank.
    pub top: Vec<Option<u8>>,
    /// Bottom operand digits, right-aligned; `None` is a leading blank.
    pub bottom: Vec<Option<u8>>,
    /// Number of answer cells.
    pub answer_cells: usize,
    /// Cell count of each partial-product row, top to bottom.
    pub partial_product_rows: Vec<usize>,
}

/// Cells for a long-division problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LongDivisionGrid {
    /// Divisor digits, left of the bracket.
    pub divisor: Vec<u8>,
    /// Dividend digits, under the bracket.
    pub dividend: Vec<u8>,
    /// Quotient cells above the dividend.
    pub quotient_cells: usize,
    /// Number of empty work rows below the dividend.
    pub work_rows: usize,
}

/// The grid a renderer draws for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ProblemGrid {
    /// Vertical stack.
    Stacked(StackedGrid),
    /// Long-division bracket.
    LongDivision(LongDivisionGrid),
}

impl ProblemGrid {
    /// Builds the grid for a problem.
    #[must_use]
    pub fn from_problem(problem: &Problem) -> Self {
        let operation: Operation = problem.operation();
        if operation.is_stacked() {
            Self::Stacked(stacked(operation, problem))
        } else {
            Self::LongDivision(long_division(problem))
        }
    }

    /// Flattens the grid into rows of cells, all of equal length.
    ///
    /// Stacked rows are right-aligned with leading spacers; long-division
    /// rows share the divisor-and-bracket indent.
    #[must_use]
    pub fn cell_rows(&self) -> Vec<Vec<Cell>> {
        match self {
            Self::Stacked(grid) => stacked_rows(grid),
            Self::LongDivision(grid) => long_division_rows(grid),
        }
    }
}

fn stacked(operation: Operation, problem: &Problem) -> StackedGrid {
    let top: Vec<u8> = digits_of(problem.top());
    let bottom: Vec<u8> = digits_of(problem.bottom());
    let width: usize = top.len().max(bottom.len());

    // One partial product per bottom digit, each shifted one place left
    let partial_product_rows: Vec<usize> =
        if operation == Operation::Multiplication && bottom.len() > 1 {
            (0..bottom.len()).map(|row| width + row + 1).collect()
        } else {
            Vec::new()
        };

    StackedGrid {
        symbol: operation.symbol(),
        width,
        top: right_align(&top, width),
        bottom: right_align(&bottom, width),
        answer_cells: width,
        partial_product_rows,
    }
}

fn long_division(problem: &Problem) -> LongDivisionGrid {
    let dividend: Vec<u8> = digits_of(problem.top());

    LongDivisionGrid {
        divisor: digits_of(problem.bottom()),
        quotient_cells: dividend.len(),
        dividend,
        work_rows: LONG_DIVISION_WORK_ROWS,
    }
}

fn right_align(digits: &[u8], width: usize) -> Vec<Option<u8>> {
    let padding: usize = width.saturating_sub(digits.len());
    std::iter::repeat_n(None, padding)
        .chain(digits.iter().copied().map(Some))
        .collect()
}

fn stacked_rows(grid: &StackedGrid) -> Vec<Vec<Cell>> {
    let operand = |digits: &[Option<u8>]| -> Vec<Cell> {
        digits
            .iter()
            .map(|digit| digit.map_or(Cell::Blank, Cell::Digit))
            .collect()
    };

    let mut rows: Vec<Vec<Cell>> = Vec::new();

    let mut top: Vec<Cell> = vec![Cell::Spacer];
    top.extend(operand(&grid.top));
    rows.push(top);

    let mut bottom: Vec<Cell> = vec![Cell::Symbol(grid.symbol)];
    bottom.extend(operand(&grid.bottom));
    rows.push(bottom);

    let mut answer: Vec<Cell> = vec![Cell::Spacer];
    answer.extend(std::iter::repeat_n(Cell::Blank, grid.answer_cells));
    rows.push(answer);

    for &cells in &grid.partial_product_rows {
        let mut row: Vec<Cell> = vec![Cell::Spacer];
        row.extend(std::iter::repeat_n(Cell::Blank, cells));
        rows.push(row);
    }

    let width: usize = rows.iter().map(Vec::len).max().unwrap_or(0);
    rows.into_iter()
        .map(|row| {
            let mut aligned: Vec<Cell> = vec![Cell::Spacer; width - row.len()];
            aligned.extend(row);
            aligned
        })
        .collect()
}

fn long_division_rows(grid: &LongDivisionGrid) -> Vec<Vec<Cell>> {
    // Divisor digits plus the bracket column
    let indent: usize = grid.divisor.len() + 1;
    let blank_row = |cells: usize| -> Vec<Cell> {
        let mut row: Vec<Cell> = vec![Cell::Spacer; indent];
        row.extend(std::iter::repeat_n(Cell::Blank, cells));
        row
    };

    let mut rows: Vec<Vec<Cell>> = vec![blank_row(grid.quotient_cells)];

    let mut problem_row: Vec<Cell> = grid.divisor.iter().copied().map(Cell::Digit).collect();
    problem_row.push(Cell::Symbol(DIVISION_BRACKET));
    problem_row.extend(grid.dividend.iter().copied().map(Cell::Digit));
    rows.push(problem_row);

    for _ in 0..grid.work_rows {
        rows.push(blank_row(grid.dividend.len()));
    }

    rows
}
