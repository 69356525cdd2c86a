// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::layout::LayoutPlan;
use mathgrid_domain::Problem;

/// Splits `items` into consecutive groups of at most `size`, in order.
///
/// The last group may be shorter. No items yields no groups. A `size` of
/// zero is treated as one.
#[must_use]
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    items.chunks(size.max(1)).collect()
}

/// One printed page of a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    index: usize,
    first_number: usize,
    problems: &'a [Problem],
}

impl<'a> Page<'a> {
    /// Returns the 0-based page index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns the worksheet-wide number of the first problem on the page.
    #[must_use]
    pub const fn first_number(&self) -> usize {
        self.first_number
    }

    /// Returns the problems on this page.
    #[must_use]
    pub const fn problems(&self) -> &'a [Problem] {
        self.problems
    }

    /// Iterates the problems with their worksheet-wide, 1-based numbers.
    ///
    /// Numbering continues across pages: the first problem on page two of
    /// an eight-per-page worksheet is number nine.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Problem)> + 'a {
        let first: usize = self.first_number;
        self.problems
            .iter()
            .enumerate()
            .map(move |(offset, problem)| (first + offset, problem))
    }
}

/// Splits problems into pages sized by a layout plan.
#[must_use]
pub fn paginate<'a>(problems: &'a [Problem], plan: &LayoutPlan) -> Vec<Page<'a>> {
    let per_page: usize = plan.per_page().max(1);

    chunk(problems, per_page)
        .into_iter()
        .enumerate()
        .map(|(index, problems)| Page {
            index,
            first_number: index * per_page + 1,
            problems,
        })
        .collect()
}
