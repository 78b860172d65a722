//! Authenticated codec with external key material.
//!
//! AES-256-GCM with a fresh random 96-bit nonce per message. The token is
//! `base64(nonce || ciphertext || tag)`.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::trace;

use super::key::VaultKey;
use super::Cipher;
use crate::error::{CipherError, Result};

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Random-nonce AES-256-GCM codec.
#[derive(Debug, Clone)]
pub struct Secure {
    key: VaultKey,
}

impl Secure {
    pub fn new(key: VaultKey) -> Self {
        Self { key }
    }

    fn cipher(&self) -> Result<Aes256Gcm> {
        Aes256Gcm::new_from_slice(self.key.as_bytes())
            .map_err(|e| CipherError::InvalidKey(e.to_string()).into())
    }
}

impl Cipher for Secure {
    fn name(&self) -> &'static str {
        "secure"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher()?
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        trace!(sealed_len = sealed.len(), "encrypted");
        Ok(STANDARD.encode(sealed))
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        let sealed = STANDARD
            .decode(token.trim())
            .map_err(|e| CipherError::MalformedToken(format!("invalid base64: {}", e)))?;
        if sealed.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::MalformedToken("token too short".to_string()).into());
        }
        trace!(sealed_len = sealed.len(), "decrypting");

        let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);
        let plaintext = self
            .cipher()?
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CipherError::MalformedToken("authentication failed".to_string()))?;

        String::from_utf8(plaintext)
            .map_err(|e| CipherError::MalformedToken(format!("UTF-8 error: {}", e)).into())
    }
}
