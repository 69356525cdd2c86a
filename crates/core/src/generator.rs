// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Problem generation.
//!
//! Generation is a total function over any well-typed configuration. Settings
//! that cannot be honored exactly are resolved with deterministic fallbacks:
//!
//! - An inverted custom range falls back to the digit-derived range, keeping
//!   the requested minimum when it still fits below the digit maximum.
//! - An empty fact-family pool behaves as if fact families were off.
//! - Zero is never chosen as a divisor.
//! - When no multiple of the divisor lies in the dividend range, the quotient
//!   is drawn from a digit width derived from `top_digits` instead.
//!
//! ## Invariants
//!
//! - Exactly `config.count` problems are returned
//! - Subtraction problems satisfy `top >= bottom`
//! - Division problems have a non-zero divisor
//! - Division without remainders satisfies `top % bottom == 0`

use crate::random::RandomSource;
use mathgrid_domain::{
    DigitRange, Operation, Problem, ProblemId, WorksheetConfig, digit_count,
};
use tracing::debug;

/// Generates the full batch of problems for a configuration.
///
/// # Arguments
///
/// * `config` - The worksheet settings
/// * `rng` - The random source
///
/// # Returns
///
/// Exactly `config.count` problems, ids `prob-{seed}-{index}`.
pub fn generate_problems<R: RandomSource + ?Sized>(
    config: &WorksheetConfig,
    rng: &mut R,
) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::with_capacity(config.count);

    for index in 0..config.count {
        problems.push(generate_problem(config, index, rng));
    }

    debug!(
        operation = %config.operation,
        count = problems.len(),
        seed = config.seed,
        "Generated problems"
    );

    problems
}

/// Generates the problem at position `index` of a batch.
pub fn generate_problem<R: RandomSource + ?Sized>(
    config: &WorksheetConfig,
    index: usize,
    rng: &mut R,
) -> Problem {
    let id: ProblemId = ProblemId::new(config.seed, index);

    let (top, bottom): (u64, u64) = match config.operation {
        Operation::Addition | Operation::Multiplication => {
            let top: u64 = top_number(config, rng);
            let bottom: u64 = bottom_number(config, rng);
            (top, bottom)
        }
        Operation::Subtraction => {
            let top: u64 = top_number(config, rng);
            let bottom: u64 = bottom_number(config, rng);
            // Larger operand on top so the difference is never negative
            if bottom > top {
                (bottom, top)
            } else {
                (top, bottom)
            }
        }
        Operation::Division => {
            let divisor: u64 = divisor_number(config, rng);
            if config.allow_remainders {
                (top_number(config, rng), divisor)
            } else {
                (exact_dividend(config, divisor, rng), divisor)
            }
        }
    };

    Problem::new(id, config.operation, top, bottom)
}

/// Draws an operand with `digits` decimal digits, optionally narrowed.
///
/// See `operand_range` for how the overrides combine with the digit range.
pub fn random_in_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    digits: u32,
    min_override: Option<u64>,
    max_override: Option<u64>,
) -> u64 {
    let range: DigitRange = operand_range(digits, min_override, max_override);
    rng.pick_inclusive(range.min(), range.max())
}

/// Computes the range an operand is drawn from.
///
/// The digit-derived range `[10^(digits-1), 10^digits - 1]` is narrowed by
/// the overrides. If narrowing inverts the range, the digit range is restored
/// and the raw `min_override` is adopted as the minimum when it does not
/// exceed the digit maximum. The returned range is never inverted.
#[must_use]
pub fn operand_range(
    digits: u32,
    min_override: Option<u64>,
    max_override: Option<u64>,
) -> DigitRange {
    let base: DigitRange = DigitRange::for_digits(digits);

    let min: u64 = min_override.map_or(base.min(), |value| value.max(base.min()));
    let max: u64 = max_override.map_or(base.max(), |value| value.min(base.max()));

    if min <= max {
        return DigitRange::new(min, max);
    }

    debug!(
        digits,
        ?min_override,
        ?max_override,
        "Custom range is inverted, falling back to digit range"
    );

    let fallback_min: u64 = min_override
        .filter(|&value| value <= base.max())
        .unwrap_or(base.min());

    DigitRange::new(fallback_min, base.max())
}

fn top_number<R: RandomSource + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> u64 {
    let (min_override, max_override): (Option<u64>, Option<u64>) = config.top_overrides();
    random_in_range(rng, config.top_digits, min_override, max_override)
}

fn bottom_number<R: RandomSource + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> u64 {
    match config.active_fact_pool() {
        Some(pool) => pick_from(pool.numbers(), rng),
        None => random_in_range(rng, config.bottom_digits, None, None),
    }
}

/// Like `bottom_number`, but never zero.
fn divisor_number<R: RandomSource + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> u64 {
    if let Some(pool) = config.active_fact_pool() {
        let candidates: &[u64] = pool.nonzero();
        if !candidates.is_empty() {
            return pick_from(candidates, rng);
        }
        debug!("Fact family pool has no non-zero divisors, using digit range");
    }

    random_in_range(rng, config.bottom_digits, None, None)
}

/// Picks a multiple of `divisor` inside the target dividend range.
fn exact_dividend<R: RandomSource + ?Sized>(
    config: &WorksheetConfig,
    divisor: u64,
    rng: &mut R,
) -> u64 {
    let base: DigitRange = DigitRange::for_digits(config.top_digits);
    let (min_override, max_override): (Option<u64>, Option<u64>) = config.top_overrides();

    // A zero bound counts as unset
    let target_min: u64 = min_override
        .filter(|&value| value > 0)
        .unwrap_or(base.min());
    let target_max: u64 = max_override
        .filter(|&value| value > 0)
        .unwrap_or(base.max());

    let mut quotients: DigitRange =
        DigitRange::new(target_min.div_ceil(divisor), target_max / divisor);

    if quotients.is_inverted() {
        let quotient_digits: u32 = config
            .top_digits
            .saturating_sub(digit_count(divisor))
            .max(1);
        debug!(
            divisor,
            target_min, target_max, quotient_digits, "No multiple of divisor in dividend range"
        );
        quotients = DigitRange::for_digits(quotient_digits);
    }

    let quotient: u64 = rng.pick_inclusive(quotients.min(), quotients.max());

    divisor.checked_mul(quotient).unwrap_or_else(|| {
        debug!(divisor, quotient, "Dividend overflows, using the divisor itself");
        divisor
    })
}

fn pick_from<R: RandomSource + ?Sized>(numbers: &[u64], rng: &mut R) -> u64 {
    let index: usize = rng.pick_index(numbers.len());
    numbers.get(index).copied().unwrap_or_default()
}
