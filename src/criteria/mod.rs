//! Password evaluation criteria
//!
//! Each criterion scores a single aspect of password strength and explains
//! its verdict. The set of criteria is closed: [`Criterion`] enumerates every
//! variant the evaluator can run.

mod complexity;
mod dictionary;
mod length;
mod repetition;

use secrecy::SecretString;

pub use complexity::{ComplexityCriterion, SPECIAL_CHARS};
pub use dictionary::{DictionaryCriterion, WEAK_LIST};
pub use length::{LengthCriterion, MIN_LENGTH};
pub use repetition::RepetitionCriterion;

/// Display name and weight of a criterion, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    name: &'static str,
    max_score: u32,
}

impl Descriptor {
    pub const fn new(name: &'static str, max_score: u32) -> Self {
        Self { name, max_score }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn max_score(&self) -> u32 {
        self.max_score
    }
}

/// Outcome of a single criterion check.
///
/// Failing a criterion is a regular outcome, reported with `met == false`
/// and a message telling the user what to change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Verdict {
    pub met: bool,
    pub message: String,
    /// Awarded points, between 0 and the criterion's maximum score.
    pub score: u32,
}

impl Verdict {
    /// Full marks for an all-or-nothing criterion.
    pub(crate) fn passed(descriptor: &Descriptor, message: impl Into<String>) -> Self {
        Self {
            met: true,
            message: message.into(),
            score: descriptor.max_score(),
        }
    }

    /// No points for an all-or-nothing criterion.
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            met: false,
            message: message.into(),
            score: 0,
        }
    }
}

/// Behavior shared by every criterion.
pub trait Check {
    fn descriptor(&self) -> &Descriptor;

    /// Evaluates the password. Must be a pure function of its input.
    fn check(&self, password: &SecretString) -> Verdict;
}

/// The closed set of criteria an [`Evaluator`](crate::Evaluator) can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Length(LengthCriterion),
    Complexity(ComplexityCriterion),
    Repetition(RepetitionCriterion),
    Dictionary(DictionaryCriterion),
}

impl Criterion {
    pub fn name(&self) -> &'static str {
        self.descriptor().name()
    }

    pub fn max_score(&self) -> u32 {
        self.descriptor().max_score()
    }
}

impl Check for Criterion {
    fn descriptor(&self) -> &Descriptor {
        match self {
            Criterion::Length(c) => c.descriptor(),
            Criterion::Complexity(c) => c.descriptor(),
            Criterion::Repetition(c) => c.descriptor(),
            Criterion::Dictionary(c) => c.descriptor(),
        }
    }

    fn check(&self, password: &SecretString) -> Verdict {
        match self {
            Criterion::Length(c) => c.check(password),
            Criterion::Complexity(c) => c.check(password),
            Criterion::Repetition(c) => c.check(password),
            Criterion::Dictionary(c) => c.check(password),
        }
    }
}

impl From<LengthCriterion> for Criterion {
    fn from(c: LengthCriterion) -> Self {
        Criterion::Length(c)
    }
}

impl From<ComplexityCriterion> for Criterion {
    fn from(c: ComplexityCriterion) -> Self {
        Criterion::Complexity(c)
    }
}

impl From<RepetitionCriterion> for Criterion {
    fn from(c: RepetitionCriterion) -> Self {
        Criterion::Repetition(c)
    }
}

impl From<DictionaryCriterion> for Criterion {
    fn from(c: DictionaryCriterion) -> Self {
        Criterion::Dictionary(c)
    }
}
