//! Evaluation report and strength label.

use std::fmt;

use crate::criteria::Verdict;

/// Upper bound of [`Report::score`].
pub const MAX_TOTAL_SCORE: u32 = 100;

/// Verdict of one criterion, tagged with the criterion it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Finding {
    pub name: &'static str,
    pub max_score: u32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub verdict: Verdict,
}

/// Result of evaluating one password against every criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    score: u32,
    findings: Vec<Finding>,
    /// `false` when the empty-password short-circuit skipped every criterion.
    evaluated: bool,
}

impl Report {
    /// Report for an empty password: no criterion runs.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Builds a report, clamping the summed score to [`MAX_TOTAL_SCORE`].
    pub(crate) fn from_findings(findings: Vec<Finding>) -> Self {
        let total = findings
            .iter()
            .fold(0u32, |acc, f| acc.saturating_add(f.verdict.score));
        Self {
            score: total.min(MAX_TOTAL_SCORE),
            findings,
            evaluated: true,
        }
    }

    /// Total score in `0..=100`.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Findings in criterion order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// `false` only for the report of an empty password, even when an
    /// evaluator with no criteria produced no findings.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    pub fn strength(&self) -> Strength {
        Strength::of(self)
    }
}

/// Serialized as `{ score, strength, findings }`.
#[cfg(feature = "serde")]
impl serde::Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Report", 3)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("strength", &self.strength())?;
        state.serialize_field("findings", &self.findings)?;
        state.end()
    }
}

/// Qualitative label for a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    NotAvailable,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn of(report: &Report) -> Self {
        if !report.is_evaluated() {
            return Strength::NotAvailable;
        }
        match report.score() {
            75.. => Strength::VeryStrong,
            50..=74 => Strength::Strong,
            1..=49 => Strength::Medium,
            0 => Strength::Weak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::NotAvailable => "N/A",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Serialized as its display label, e.g. `"Very Strong"`.
#[cfg(feature = "serde")]
impl serde::Serialize for Strength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
