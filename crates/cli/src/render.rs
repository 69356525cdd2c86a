// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of a worksheet for the terminal or a printer.

use mathgrid::Cell;
use mathgrid_api::{PageResponse, ProblemResponse, WorksheetResponse};
use mathgrid_domain::GridSize;

/// Spaces between neighbouring problems on the same row.
const COLUMN_GAP: usize = 4;

/// Separates printed pages.
const PAGE_BREAK: char = '\u{000C}';

/// Renders every page of the worksheet, separated by form feeds.
pub fn render_worksheet(response: &WorksheetResponse) -> String {
    let cell_width: usize = cell_width(response.grid_size);
    let columns: usize = response.layout.columns().max(1);

    response
        .pages
        .iter()
        .map(|page| render_page(page, response, columns, cell_width))
        .collect::<Vec<String>>()
        .join(&format!("\n{PAGE_BREAK}"))
}

const fn cell_width(grid_size: GridSize) -> usize {
    match grid_size {
        GridSize::Small => 2,
        GridSize::Medium => 3,
        GridSize::Large => 4,
    }
}

fn render_page(
    page: &PageResponse,
    response: &WorksheetResponse,
    columns: usize,
    cell_width: usize,
) -> String {
    let mut out: String = format!(
        "{} - Page {} of {}\n\n",
        response.operation, page.page_number, response.page_count
    );

    for row in page.problems.chunks(columns) {
        let blocks: Vec<Vec<String>> = row
            .iter()
            .map(|problem| problem_block(problem, cell_width))
            .collect();
        out.push_str(&join_blocks(&blocks));
        out.push('\n');
    }

    out.push_str(&response.footer);
    out.push('\n');
    out
}

/// The numbered label followed by one line per grid row.
fn problem_block(problem: &ProblemResponse, cell_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![format!("{}.", problem.number)];

    for cells in problem.grid.cell_rows() {
        let mut line: String = String::with_capacity(cells.len() * cell_width);
        for &cell in &cells {
            line.push_str(&" ".repeat(cell_width.saturating_sub(1)));
            line.push(glyph(cell));
        }
        lines.push(line);
    }

    lines
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Digit(digit) => char::from(b'0' + digit % 10),
        Cell::Symbol(symbol) => symbol,
        Cell::Blank => '_',
        Cell::Spacer => ' ',
    }
}

/// Places blocks side by side, padding each to its widest line.
fn join_blocks(blocks: &[Vec<String>]) -> String {
    let height: usize = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(|line| line.chars().count()).max().unwrap_or(0))
        .collect();

    let mut out: String = String::new();
    for line_index in 0..height {
        let mut line: String = String::new();
        for (block, &width) in blocks.iter().zip(&widths) {
            let text: &str = block.get(line_index).map_or("", String::as_str);
            let padding: usize = width.saturating_sub(text.chars().count());
            line.push_str(text);
            line.push_str(&" ".repeat(padding + COLUMN_GAP));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
