// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::RandomSource;
use mathgrid_domain::{FactFamilyPool, Operation, Problem, ProblemId, WorksheetConfig};
use std::collections::VecDeque;

/// Where in the requested range a scripted pick lands.
#[derive(Debug, Clone, Copy)]
pub enum Pick {
    Low,
    High,
    Offset(u64),
}

/// A random source that returns scripted picks and records every request.
pub struct ScriptedSource {
    picks: VecDeque<Pick>,
    fallback: Pick,
    pub requests: Vec<(u64, u64)>,
}

impl ScriptedSource {
    pub fn new(picks: Vec<Pick>, fallback: Pick) -> Self {
        Self {
            picks: picks.into(),
            fallback,
            requests: Vec::new(),
        }
    }

    pub fn always(pick: Pick) -> Self {
        Self::new(Vec::new(), pick)
    }
}

impl RandomSource for ScriptedSource {
    fn pick_inclusive(&mut self, min: u64, max: u64) -> u64 {
        self.requests.push((min, max));
        match self.picks.pop_front().unwrap_or(self.fallback) {
            Pick::Low => min,
            Pick::High => max,
            Pick::Offset(offset) => min + offset.min(max - min),
        }
    }
}

pub fn create_test_config(operation: Operation) -> WorksheetConfig {
    WorksheetConfig {
        operation,
        seed: 42,
        ..WorksheetConfig::default()
    }
}

pub fn create_fact_family_config(operation: Operation, numbers: Vec<u64>) -> WorksheetConfig {
    WorksheetConfig {
        use_fact_families: true,
        selected_numbers: FactFamilyPool::new(numbers),
        ..create_test_config(operation)
    }
}

pub fn create_test_problems(count: usize) -> Vec<Problem> {
    (0..count)
        .map(|index| {
            let top: u64 = u64::try_from(index).unwrap() + 10;
            Problem::new(ProblemId::new(7, index), Operation::Addition, top, 5)
        })
        .collect()
}
