//! Password strength evaluation.
//!
//! A password starts at a perfect score of 1.0. Each [`Rule`] that fires
//! subtracts its fixed penalty and the result is clamped to `[0.0, 1.0]`.
//! The same rules produce the remediation [`Finding`]s.
//!
//! ```
//! use passforge::core::strength::{Band, Evaluator};
//!
//! let evaluator = Evaluator::default();
//! assert_eq!(evaluator.score("123456"), 0.0);
//! assert_eq!(evaluator.report("Str0ng!Passw0rd").band, Band::Strong);
//! ```

mod lists;
mod rules;

use serde::Serialize;
use tracing::trace;

pub use lists::DenyLists;
pub use rules::{contains_date, Rule, MIN_LENGTH};

/// Perfect score, in tenths.
const FULL_TENTHS: u32 = 10;

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    Weak,
    Medium,
    Strong,
}

impl Band {
    /// Below 0.5 is weak, below 0.8 is medium, anything else is strong.
    pub fn from_score(score: f64) -> Self {
        if score < 0.5 {
            Band::Weak
        } else if score < 0.8 {
            Band::Medium
        } else {
            Band::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Weak => "Weak",
            Band::Medium => "Medium",
            Band::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A failing rule and what to do about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: Rule,
    pub message: &'static str,
}

impl From<Rule> for Finding {
    fn from(rule: Rule) -> Self {
        Self {
            rule,
            message: rule.message(),
        }
    }
}

/// Score, band and findings for one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub score: f64,
    pub band: Band,
    pub findings: Vec<Finding>,
}

/// Scores passwords against a set of deny-lists.
#[derive(Debug, Clone)]
pub struct Evaluator {
    lists: DenyLists,
}

impl Evaluator {
    pub fn new(lists: DenyLists) -> Self {
        Self {
            lists: lists.normalized(),
        }
    }

    /// Rules that fire for `password`, in evaluation order.
    pub fn failing_rules(&self, password: &str) -> Vec<Rule> {
        let lowered = password.to_lowercase();
        Rule::ALL
            .into_iter()
            .filter(|rule| rule.fires(password, &lowered, &self.lists))
            .collect()
    }

    /// Strength in `[0.0, 1.0]`.
    pub fn score(&self, password: &str) -> f64 {
        Self::score_of(&self.failing_rules(password))
    }

    /// One finding per failing rule; empty when the password passes every rule.
    pub fn recommendations(&self, password: &str) -> Vec<Finding> {
        self.failing_rules(password)
            .into_iter()
            .map(Finding::from)
            .collect()
    }

    pub fn report(&self, password: &str) -> Report {
        let failing = self.failing_rules(password);
        let score = Self::score_of(&failing);
        trace!(
            length = password.chars().count(),
            failing = failing.len(),
            score,
            "evaluated password"
        );
        Report {
            score,
            band: Band::from_score(score),
            findings: failing.into_iter().map(Finding::from).collect(),
        }
    }

    fn score_of(failing: &[Rule]) -> f64 {
        let penalty: u32 = failing.iter().map(|rule| rule.penalty_tenths()).sum();
        f64::from(FULL_TENTHS.saturating_sub(penalty)) / 10.0
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DenyLists::default())
    }
}

/// Score `password` against the built-in deny-lists.
pub fn score(password: &str) -> f64 {
    Evaluator::default().score(password)
}

/// Findings for `password` against the built-in deny-lists.
pub fn recommendations(password: &str) -> Vec<Finding> {
    Evaluator::default().recommendations(password)
}
