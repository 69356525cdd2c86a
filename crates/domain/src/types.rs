// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The arithmetic operation practiced on a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Operation {
    /// Vertical addition.
    #[default]
    Addition,
    /// Vertical subtraction. Results are never negative.
    Subtraction,
    /// Vertical multiplication, with partial-product rows for wide bottoms.
    Multiplication,
    /// Long division. Top is the dividend, bottom the divisor.
    Division,
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "addition" | "add" => Ok(Self::Addition),
            "subtraction" | "subtract" | "sub" => Ok(Self::Subtraction),
            "multiplication" | "multiply" | "mul" => Ok(Self::Multiplication),
            "division" | "divide" | "div" => Ok(Self::Division),
            _ => Err(DomainError::InvalidOperation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// Converts this operation to its display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
        }
    }

    /// Returns the operator symbol drawn beside the bottom operand.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '−',
            Self::Multiplication => '×',
            Self::Division => '÷',
        }
    }

    /// Returns the label for the top operand setting.
    #[must_use]
    pub const fn top_label(&self) -> &'static str {
        match self {
            Self::Division => "Dividend",
            _ => "Top Number",
        }
    }

    /// Returns the label for the bottom operand setting.
    #[must_use]
    pub const fn bottom_label(&self) -> &'static str {
        match self {
            Self::Division => "Divisor",
            _ => "Bottom Number",
        }
    }

    /// Returns whether problems of this operation are drawn as a vertical stack.
    #[must_use]
    pub const fn is_stacked(&self) -> bool {
        !matches!(self, Self::Division)
    }
}

/// Cell size hint passed through to renderers.
///
/// Grid size never influences which problems are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GridSize {
    /// Compact cells.
    #[serde(rename = "sm")]
    Small,
    /// Default cells.
    #[default]
    #[serde(rename = "md")]
    Medium,
    /// Large cells for younger students.
    #[serde(rename = "lg")]
    Large,
}

impl FromStr for GridSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(Self::Small),
            "md" | "medium" => Ok(Self::Medium),
            "lg" | "large" => Ok(Self::Large),
            _ => Err(DomainError::InvalidGridSize(s.to_string())),
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl GridSize {
    /// Converts this grid size to its short name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

/// Identifier of a problem within one generated batch.
///
/// Derived from the seed and the problem's position, never from its
/// operands, so two problems with equal operands still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(String);

impl ProblemId {
    /// Creates the id for the problem at `index` in the batch for `seed`.
    #[must_use]
    pub fn new(seed: u64, index: usize) -> Self {
        Self(format!("prob-{seed}-{index}"))
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single generated arithmetic problem.
///
/// For division, `top` is the dividend and `bottom` the divisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    id: ProblemId,
    operation: Operation,
    top: u64,
    bottom: u64,
}

impl Problem {
    /// Creates a new problem.
    ///
    /// # Arguments
    ///
    /// * `id` - The batch-unique identifier
    /// * `operation` - The operation practiced
    /// * `top` - The top operand (dividend for division)
    /// * `bottom` - The bottom operand (divisor for division)
    #[must_use]
    pub const fn new(id: ProblemId, operation: Operation, top: u64, bottom: u64) -> Self {
        Self {
            id,
            operation,
            top,
            bottom,
        }
    }

    /// Returns the problem id.
    #[must_use]
    pub const fn id(&self) -> &ProblemId {
        &self.id
    }

    /// Returns the operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the top operand.
    #[must_use]
    pub const fn top(&self) -> u64 {
        self.top
    }

    /// Returns the bottom operand.
    #[must_use]
    pub const fn bottom(&self) -> u64 {
        self.bottom
    }
}
