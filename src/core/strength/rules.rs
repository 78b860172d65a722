//! The ordered penalty rules.

use serde::Serialize;

use super::lists::DenyLists;

/// Passwords shorter than this (in characters) are penalized.
pub const MIN_LENGTH: usize = 12;

/// A single strength rule. Declaration order is evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
    WeakPassword,
    Sequence,
    Date,
    CommonName,
    NameDigits,
    CommonWord,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 11] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Symbol,
        Rule::WeakPassword,
        Rule::Sequence,
        Rule::Date,
        Rule::CommonName,
        Rule::NameDigits,
        Rule::CommonWord,
    ];

    /// Penalty in tenths of a point.
    pub fn penalty_tenths(self) -> u32 {
        match self {
            Rule::Length => 3,
            Rule::Uppercase | Rule::Lowercase | Rule::Digit | Rule::Symbol => 1,
            Rule::WeakPassword => 5,
            Rule::Sequence => 3,
            Rule::Date | Rule::CommonName => 2,
            Rule::NameDigits => 3,
            Rule::CommonWord => 4,
        }
    }

    /// Penalty subtracted from the score when the rule fires.
    pub fn penalty(self) -> f64 {
        f64::from(self.penalty_tenths()) / 10.0
    }

    /// Remediation shown to the user when the rule fires.
    pub fn message(self) -> &'static str {
        match self {
            Rule::Length => "Increase the length to at least 12 characters.",
            Rule::Uppercase => "Add uppercase letters.",
            Rule::Lowercase => "Add lowercase letters.",
            Rule::Digit => "Add numbers.",
            Rule::Symbol => "Add special characters (e.g. !@#$%^&*).",
            Rule::WeakPassword => "Avoid common or predictable passwords.",
            Rule::Sequence => "Avoid simple sequences (e.g. 123456, qwerty).",
            Rule::Date => "Avoid dates (e.g. 2504 for April 25th).",
            Rule::CommonName => "Avoid common names (e.g. daniel, maria).",
            Rule::NameDigits => "Avoid a name followed by numbers (e.g. daniel123).",
            Rule::CommonWord => "Avoid common words (e.g. password, admin).",
        }
    }

    /// True when the rule fires for `password`.
    ///
    /// `lowered` must be `password.to_lowercase()`; `lists` must be normalized.
    pub(crate) fn fires(self, password: &str, lowered: &str, lists: &DenyLists) -> bool {
        match self {
            Rule::Length => password.chars().count() < MIN_LENGTH,
            Rule::Uppercase => !password.chars().any(char::is_uppercase),
            Rule::Lowercase => !password.chars().any(char::is_lowercase),
            Rule::Digit => !password.chars().any(|c| c.is_ascii_digit()),
            Rule::Symbol => password.chars().all(char::is_alphanumeric),
            Rule::WeakPassword => lists.weak_passwords.iter().any(|w| w == password),
            Rule::Sequence => lists.sequences.iter().any(|s| password.contains(s.as_str())),
            Rule::Date => contains_date(password),
            Rule::CommonName => lists.common_names.iter().any(|n| lowered.contains(n.as_str())),
            Rule::NameDigits => lists.name_prefixes.iter().any(|name| {
                lowered
                    .strip_prefix(name.as_str())
                    .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
            }),
            Rule::CommonWord => lists.common_words.iter().any(|w| lowered.contains(w.as_str())),
        }
    }
}

/// True if any run of four consecutive ASCII digits reads as a valid DDMM.
///
/// Windows containing any non-digit (including non-ASCII digits) are skipped.
pub fn contains_date(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(4).any(|window| {
        let digits: Option<Vec<u32>> = window.iter().map(|c| c.to_digit(10)).collect();
        match digits.as_deref() {
            Some(&[d0, d1, m0, m1]) => {
                let day = d0 * 10 + d1;
                let month = m0 * 10 + m1;
                (1..=31).contains(&day) && (1..=12).contains(&month)
            }
            _ => false,
        }
    })
}
