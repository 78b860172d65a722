//! Random password generation.
//!
//! Passwords are drawn uniformly from the concatenation of the enabled
//! character classes, one index per position, using a cryptographically
//! secure random source.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeneratorError, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character classes enabled for generation.
///
/// At least one class must be enabled; [`generate`] rejects an empty spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetSpec {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharsetSpec {
    /// Every class enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    /// True when no class is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// The alphabet in fixed class order: uppercase, lowercase, digits, symbols.
    pub fn alphabet(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, class)| class.chars())
        .collect()
    }
}

impl Default for CharsetSpec {
    fn default() -> Self {
        Self::all()
    }
}

/// Generate a password of `length` characters using the operating system RNG.
///
/// # Errors
///
/// Returns `GeneratorError::ZeroLength` for a zero length and
/// `GeneratorError::NoCharacterClasses` when `charset` enables nothing.
pub fn generate(length: usize, charset: CharsetSpec) -> Result<String> {
    generate_with(&mut OsRng, length, charset)
}

/// Generate a password with a caller-supplied secure RNG.
///
/// Seeded generators make the output reproducible in tests.
pub fn generate_with<R>(rng: &mut R, length: usize, charset: CharsetSpec) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    if length == 0 {
        return Err(GeneratorError::ZeroLength.into());
    }
    if charset.is_empty() {
        return Err(GeneratorError::NoCharacterClasses.into());
    }

    let alphabet = charset.alphabet();
    debug!(length, alphabet = alphabet.len(), "generating password");

    let password = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(password)
}
