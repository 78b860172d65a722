//! The primary interface for vault operations.
//!
//! A vault pairs a [`Cipher`] with a [`Store`]: saving encrypts then appends,
//! listing reads every line and decrypts it. A corrupt line never aborts a
//! listing; it comes back as [`Entry::Malformed`] in its original position.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::cipher::{Cipher, CipherBackend};
use crate::core::config::Config;
use crate::core::store::{Filesystem, Store};
use crate::error::Result;

/// One line of the vault after decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Entry {
    /// Line `index` (1-based) decrypted to `password`.
    Decrypted { index: usize, password: String },
    /// Line `index` (1-based) could not be decrypted.
    Malformed { index: usize, reason: String },
}

impl Entry {
    pub fn index(&self) -> usize {
        match self {
            Entry::Decrypted { index, .. } | Entry::Malformed { index, .. } => *index,
        }
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            Entry::Decrypted { password, .. } => Some(password),
            Entry::Malformed { .. } => None,
        }
    }
}

/// Encrypted password vault.
#[derive(Debug)]
pub struct Vault<C = CipherBackend, S = Filesystem> {
    cipher: C,
    store: S,
}

impl Vault {
    /// Open the vault described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the cipher backend cannot be built (for example
    /// secure mode without key material) or the vault path cannot be resolved.
    pub fn open(config: &Config) -> Result<Self> {
        let cipher = CipherBackend::from_config(config)?;
        let store = Filesystem::new(config.vault_path()?);
        debug!(cipher = cipher.name(), path = %store.location(), "vault opened");
        Ok(Self::new(cipher, store))
    }
}

impl<C: Cipher, S: Store> Vault<C, S> {
    pub fn new(cipher: C, store: S) -> Self {
        Self { cipher, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encrypt `password` and append it to the store.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails or `StoreError::Unavailable`
    /// if the store rejects the write.
    pub fn save(&self, password: &str) -> Result<()> {
        let token = self.cipher.encrypt(password)?;
        self.store.append(&token)?;
        debug!(location = %self.store.location(), "password saved");
        Ok(())
    }

    /// Decrypt every stored entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when the store cannot be read. Per-entry
    /// decryption failures are reported as [`Entry::Malformed`] instead.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        let tokens = self.store.read_all()?;
        debug!(count = tokens.len(), "decrypting entries");

        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let index = i + 1;
                match self.cipher.decrypt(token) {
                    Ok(password) => Ok(Entry::Decrypted { index, password }),
                    Err(e) if e.is_malformed_token() => {
                        warn!(index, "skipping malformed entry");
                        Ok(Entry::Malformed {
                            index,
                            reason: e.to_string(),
                        })
                    }
                    Err(e) => Err(e),
                }
            })
            .collect()
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.store.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
