//! Legacy-compatible codec.
//!
//! AES-256-CBC with PKCS#7 padding, an all-zero IV and a key derived from a
//! fixed passphrase. Identical plaintexts always produce identical tokens,
//! and the key can be recovered from this source. Kept only so existing
//! vault files stay readable; new vaults should use [`super::Secure`].

use std::sync::OnceLock;

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use tracing::trace;

use super::key::VaultKey;
use super::Cipher;
use crate::core::constants::{LEGACY_ITERATIONS, LEGACY_PASSPHRASE, LEGACY_SALT};
use crate::error::{CipherError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const ZERO_IV: [u8; 16] = [0u8; 16];

static LEGACY_KEY: OnceLock<VaultKey> = OnceLock::new();

/// The legacy key, derived on first use and cached for the process.
pub fn legacy_key() -> &'static VaultKey {
    LEGACY_KEY.get_or_init(|| {
        trace!("deriving legacy vault key");
        VaultKey::derive(LEGACY_PASSPHRASE, &LEGACY_SALT, LEGACY_ITERATIONS)
    })
}

/// Fixed-key, fixed-IV AES-256-CBC codec.
#[derive(Debug, Clone, Copy)]
pub struct Mirror {
    key: &'static VaultKey,
}

impl Mirror {
    pub fn new() -> Self {
        Self { key: legacy_key() }
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for Mirror {
    fn name(&self) -> &'static str {
        "mirror"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let encryptor = Aes256CbcEnc::new_from_slices(self.key.as_bytes(), &ZERO_IV)
            .map_err(|e| CipherError::InvalidKey(e.to_string()))?;
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        trace!(ciphertext_len = ciphertext.len(), "encrypted");
        Ok(STANDARD.encode(ciphertext))
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        let ciphertext = STANDARD
            .decode(token.trim())
            .map_err(|e| CipherError::MalformedToken(format!("invalid base64: {}", e)))?;
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let decryptor = Aes256CbcDec::new_from_slices(self.key.as_bytes(), &ZERO_IV)
            .map_err(|e| CipherError::InvalidKey(e.to_string()))?;
        let plaintext = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CipherError::MalformedToken("invalid padding".to_string()))?;

        String::from_utf8(plaintext)
            .map_err(|e| CipherError::MalformedToken(format!("UTF-8 error: {}", e)).into())
    }
}
