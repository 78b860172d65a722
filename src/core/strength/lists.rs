//! Deny-lists consulted by the strength rules.
//!
//! The lists are plain data handed to the evaluator at construction, so
//! callers (and tests) can substitute their own.

use serde::{Deserialize, Serialize};

const WEAK_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "123456789", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey", "letmein",
    "696969", "shadow", "master", "666666",
];

const COMMON_NAMES: &[&str] = &[
    "daniel", "maria", "joao", "ana", "pedro", "carlos", "paulo", "lucas", "mariana", "julia",
    "andre", "rafael", "fernando", "gabriel", "lucia", "sandra", "patricia", "roberto",
    "ricardo", "felipe",
];

const COMMON_WORDS: &[&str] = &[
    "password", "admin", "welcome", "login", "letmein", "master", "sunshine", "shadow",
    "monkey", "football",
];

const SEQUENCES: &[&str] = &["123456", "654321", "qwerty", "ytrewq"];

/// Number of leading common names also checked for the name+digits pattern.
const NAME_PREFIX_COUNT: usize = 10;

/// Immutable lists of penalized values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenyLists {
    /// Exact, case-sensitive matches.
    pub weak_passwords: Vec<String>,
    /// Case-insensitive substrings.
    pub common_names: Vec<String>,
    /// Case-insensitive prefixes that must be followed only by digits.
    pub name_prefixes: Vec<String>,
    /// Case-insensitive substrings.
    pub common_words: Vec<String>,
    /// Case-sensitive substrings.
    pub sequences: Vec<String>,
}

impl DenyLists {
    /// Lists with nothing in them. No list-based rule can fire.
    pub fn empty() -> Self {
        Self {
            weak_passwords: Vec::new(),
            common_names: Vec::new(),
            name_prefixes: Vec::new(),
            common_words: Vec::new(),
            sequences: Vec::new(),
        }
    }

    /// Lowercase the case-insensitive lists so matching only lowers the input.
    pub(crate) fn normalized(mut self) -> Self {
        for list in [
            &mut self.common_names,
            &mut self.name_prefixes,
            &mut self.common_words,
        ] {
            for entry in list.iter_mut() {
                *entry = entry.to_lowercase();
            }
            list.retain(|entry| !entry.is_empty());
        }
        self.sequences.retain(|entry| !entry.is_empty());
        self
    }
}

impl Default for DenyLists {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            weak_passwords: owned(WEAK_PASSWORDS),
            common_names: owned(COMMON_NAMES),
            name_prefixes: owned(&COMMON_NAMES[..NAME_PREFIX_COUNT]),
            common_words: owned(COMMON_WORDS),
            sequences: owned(SEQUENCES),
        }
    }
}
