// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{Pick, ScriptedSource, create_fact_family_config, create_test_config};
use crate::{NO_PROBLEM_MESSAGE, RandSource, format_grouped, phrase_problem, phrase_word_problem};
use mathgrid_domain::{Operation, Problem, ProblemId, WorksheetConfig};

#[test]
fn test_word_problem_substitutes_grouped_operands() {
    let config: WorksheetConfig = WorksheetConfig {
        top_digits: 4,
        ..create_fact_family_config(Operation::Addition, vec![2500])
    };
    let mut rng: ScriptedSource = ScriptedSource::always(Pick::High);

    let text: String = phrase_word_problem(&config, &mut rng);

    assert_eq!(
        text,
        "In a video game, Tom scored 9,999 points in Level 1 and 2,500 points in Level 2. What is his total score?"
    );
}

#[test]
fn test_word_problem_ignores_requested_count() {
    let config: WorksheetConfig = WorksheetConfig {
        count: 0,
        ..create_test_config(Operation::Subtraction)
    };
    let mut rng = RandSource::seeded(8);

    let text: String = phrase_word_problem(&config, &mut rng);

    assert_ne!(text, NO_PROBLEM_MESSAGE);
}

#[test]
fn test_word_problem_leaves_no_placeholders() {
    for operation in Operation::ALL {
        for seed in 0..20 {
            let config: WorksheetConfig = WorksheetConfig {
                top_digits: 5,
                ..create_test_config(operation)
            };
            let mut rng = RandSource::seeded(seed);

            let text: String = phrase_word_problem(&config, &mut rng);

            assert!(!text.contains("{top}"), "{text}");
            assert!(!text.contains("{bottom}"), "{text}");
        }
    }
}

#[test]
fn test_phrase_problem_uses_operation_templates() {
    let problem: Problem = Problem::new(ProblemId::new(1, 0), Operation::Division, 1_440, 12);
    let mut rng: ScriptedSource = ScriptedSource::always(Pick::Low);

    let text: String = phrase_problem(&problem, &mut rng);

    assert_eq!(
        text,
        "A factory produced 1,440 toys. They need to be packed equally into 12 boxes. How many toys go in each box?"
    );
    assert!(text.contains(&format_grouped(problem.top())));
}

#[test]
fn test_phrase_problem_keeps_operand_roles_in_reordered_template() {
    let problem: Problem =
        Problem::new(ProblemId::new(1, 0), Operation::Multiplication, 24, 3);
    let mut rng: ScriptedSource = ScriptedSource::always(Pick::Offset(2));

    let text: String = phrase_problem(&problem, &mut rng);

    assert_eq!(
        text,
        "A building has 3 floors. There are 24 windows on each floor. How many windows does the building have?"
    );
}

#[test]
fn test_no_problem_message() {
    assert_eq!(NO_PROBLEM_MESSAGE, "Could not generate problem.");
}
