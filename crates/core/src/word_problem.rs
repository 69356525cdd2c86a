// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Word problems built from a freshly generated problem.

use crate::generator::generate_problems;
use crate::random::RandomSource;
use mathgrid_domain::{Operation, Problem, WorksheetConfig};
use tracing::debug;

/// Returned when no problem could be generated to phrase.
pub const NO_PROBLEM_MESSAGE: &str = "Could not generate problem.";

const TOP_PLACEHOLDER: &str = "{top}";
const BOTTOM_PLACEHOLDER: &str = "{bottom}";

/// Returns the fixed template set for an operation.
#[must_use]
pub const fn templates(operation: Operation) -> &'static [&'static str] {
    match operation {
        Operation::Addition => &[
            "There are {top} apples in a large basket. The farmer adds {bottom} more apples. How many apples are there in total?",
            "Sarah read {top} pages of her book last week and {bottom} pages this week. How many pages did she read altogether?",
            "A library has {top} fiction books and {bottom} non-fiction books on a shelf. What is the total number of books?",
            "In a video game, Tom scored {top} points in Level 1 and {bottom} points in Level 2. What is his total score?",
        ],
        Operation::Subtraction => &[
            "A warehouse had {top} boxes. A truck loaded {bottom} boxes to deliver. How many boxes are left in the warehouse?",
            "The school cafeteria made {top} sandwiches. The students ate {bottom} of them. How many sandwiches are remaining?",
            "A puzzle has {top} pieces. You have already connected {bottom} pieces. How many pieces are left to finish?",
            "Farmer Joe grew {top} pumpkins. He sold {bottom} at the market. How many pumpkins does he have left?",
        ],
        Operation::Multiplication => &[
            "There are {top} rows of seats in the theater. Each row has {bottom} seats. How many seats are there in total?",
            "A factory packs {top} crayons in a box. If they ship {bottom} boxes, how many crayons are shipped in total?",
            "A building has {bottom} floors. There are {top} windows on each floor. How many windows does the building have?",
            "If a car travels {top} miles per hour, how many miles will it travel in {bottom} hours?",
        ],
        Operation::Division => &[
            "A factory produced {top} toys. They need to be packed equally into {bottom} boxes. How many toys go in each box?",
            "There are {top} students going on a field trip. They are split into {bottom} equal groups. How many students are in each group?",
            "A gardener has {top} seeds to plant in {bottom} rows. If she plants the same number in each row, how many seeds are in a row?",
            "You have {top} tickets to give to {bottom} friends. If you share them equally, how many tickets does each friend get?",
        ],
    }
}

/// Generates one problem from `config` and phrases it as a word problem.
///
/// The configuration's `count` is ignored; exactly one problem is generated.
pub fn phrase_word_problem<R: RandomSource + ?Sized>(
    config: &WorksheetConfig,
    rng: &mut R,
) -> String {
    let problems: Vec<Problem> = generate_problems(&config.single(), rng);

    match problems.first() {
        Some(problem) => phrase_problem(problem, rng),
        None => {
            debug!("No problem generated for word problem");
            NO_PROBLEM_MESSAGE.to_string()
        }
    }
}

/// Phrases an existing problem using a randomly chosen template.
pub fn phrase_problem<R: RandomSource + ?Sized>(problem: &Problem, rng: &mut R) -> String {
    let choices: &[&str] = templates(problem.operation());
    let template: &str = choices
        .get(rng.pick_index(choices.len()))
        .copied()
        .unwrap_or(TOP_PLACEHOLDER);

    fill_template(template, problem.top(), problem.bottom())
}

/// Substitutes the first `{top}` and `{bottom}` in `template`.
#[must_use]
pub fn fill_template(template: &str, top: u64, bottom: u64) -> String {
    template
        .replacen(TOP_PLACEHOLDER, &format_grouped(top), 1)
        .replacen(BOTTOM_PLACEHOLDER, &format_grouped(bottom), 1)
}

/// Formats `value` with comma thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits: String = value.to_string();
    let len: usize = digits.len();
    let mut grouped: String = String::with_capacity(len + len / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (len - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
