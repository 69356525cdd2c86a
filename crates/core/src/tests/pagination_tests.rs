// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_problems;
use crate::{LayoutPlan, Page, chunk, paginate};
use mathgrid_domain::Problem;

#[test]
fn test_chunk_thirteen_by_eight() {
    let problems: Vec<Problem> = create_test_problems(13);

    let pages: Vec<&[Problem]> = chunk(&problems, 8);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 8);
    assert_eq!(pages[1].len(), 5);
    assert_eq!(pages[1][0], problems[8]);
}

#[test]
fn test_chunk_empty_yields_no_pages() {
    let problems: Vec<Problem> = Vec::new();
    assert!(chunk(&problems, 8).is_empty());
}

#[test]
fn test_chunk_exact_multiple_has_no_short_page() {
    let numbers: Vec<u32> = (0..16).collect();
    let pages: Vec<&[u32]> = chunk(&numbers, 8);
    assert_eq!(pages.iter().map(|p| p.len()).collect::<Vec<usize>>(), vec![8, 8]);
}

#[test]
fn test_chunk_zero_size_is_treated_as_one() {
    let numbers: Vec<u32> = vec![1, 2, 3];
    assert_eq!(chunk(&numbers, 0).len(), 3);
}

#[test]
fn test_paginate_preserves_order() {
    let problems: Vec<Problem> = create_test_problems(20);

    let pages: Vec<Page<'_>> = paginate(&problems, &LayoutPlan::new(3, 3));
    let flattened: Vec<&Problem> = pages.iter().flat_map(|page| page.problems()).collect();

    assert_eq!(pages.len(), 3);
    assert_eq!(flattened, problems.iter().collect::<Vec<&Problem>>());
}

#[test]
fn test_paginate_numbers_continue_across_pages() {
    let problems: Vec<Problem> = create_test_problems(13);

    let pages: Vec<Page<'_>> = paginate(&problems, &LayoutPlan::new(2, 4));

    assert_eq!(pages[0].number(), 1);
    assert_eq!(pages[0].first_number(), 1);
    assert_eq!(pages[1].index(), 1);
    assert_eq!(pages[1].first_number(), 9);

    let numbers: Vec<usize> = pages[1].numbered().map(|(number, _)| number).collect();
    assert_eq!(numbers, vec![9, 10, 11, 12, 13]);
}
