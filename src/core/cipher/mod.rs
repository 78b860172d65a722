//! Vault codec.
//!
//! Turns a password into an opaque base64 token for the store and back.
//! Key and IV provisioning live entirely inside each backend, so callers only
//! see the [`Cipher`] contract.
//!
//! ## Backends
//!
//! - **mirror**: Default. AES-256-CBC with a fixed, passphrase-derived key and
//!   an all-zero IV. Reads and writes vault files created by the legacy tool.
//! - **secure**: AES-256-GCM with a random nonce per message and externally
//!   supplied key material.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait in a new file
//! 2. Add a variant to `CipherBackend` and a `CipherMode` config value
//! 3. Re-export from this module

use crate::error::Result;

mod backend;
mod key;
mod mirror;
mod secure;

pub use backend::CipherBackend;
pub use key::VaultKey;
pub use mirror::{legacy_key, Mirror};
pub use secure::Secure;

/// Symmetric codec for stored passwords.
pub trait Cipher {
    /// Encrypt a password into a base64 token.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the backend cannot encrypt.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a token produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedToken` when the token is not base64,
    /// fails to decrypt, or does not hold UTF-8 text.
    fn decrypt(&self, token: &str) -> Result<String>;

    /// Backend name for display/config.
    fn name(&self) -> &'static str;
}

/// Encrypt with the legacy mirror backend.
///
/// Convenience wrapper around `Mirror::encrypt`.
pub fn encrypt(plaintext: &str) -> Result<String> {
    Mirror::new().encrypt(plaintext)
}

/// Decrypt with the legacy mirror backend.
///
/// Convenience wrapper around `Mirror::decrypt`.
pub fn decrypt(token: &str) -> Result<String> {
    Mirror::new().decrypt(token)
}
