//! Cipher backend selection and dispatch.
//!
//! Two modes:
//! - **Mirror** (default): legacy fixed-key format
//! - **Secure**: random nonce, key from `vault.key_file` or `PASSFORGE_KEY`

use crate::core::config::{CipherMode, Config};
use crate::core::constants;
use crate::error::{ConfigError, Result};
use tracing::debug;

use super::{Cipher, Mirror, Secure, VaultKey};

/// Cipher backend for vault operations.
#[derive(Debug)]
pub enum CipherBackend {
    /// Legacy AES-256-CBC, fixed key and IV
    Mirror(Mirror),

    /// AES-256-GCM with external key
    Secure(Secure),
}

impl CipherBackend {
    /// Create a cipher backend from configuration and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` in secure mode when neither a key
    /// file nor `PASSFORGE_KEY` is available, or `CipherError::InvalidKey`
    /// when the key material is malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let env_key = std::env::var(constants::KEY_ENV).ok();
        Self::build(config, env_key.as_deref())
    }

    /// Same as [`CipherBackend::from_config`] with the environment key passed in.
    pub fn build(config: &Config, env_key: Option<&str>) -> Result<Self> {
        match config.vault.cipher {
            CipherMode::Mirror => {
                debug!("creating mirror cipher backend");
                Ok(Self::Mirror(Mirror::new()))
            }
            CipherMode::Secure => {
                let key = Self::load_key(config, env_key)?;
                debug!("creating secure cipher backend");
                Ok(Self::Secure(Secure::new(key)))
            }
        }
    }

    /// Key file takes precedence over the environment variable.
    fn load_key(config: &Config, env_key: Option<&str>) -> Result<VaultKey> {
        if let Some(path) = &config.vault.key_file {
            debug!(path = %path.display(), "reading key file");
            let encoded = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            return VaultKey::from_base64(&encoded);
        }
        match env_key {
            Some(encoded) => {
                debug!(env = constants::KEY_ENV, "using key from environment");
                VaultKey::from_base64(encoded)
            }
            None => Err(ConfigError::MissingKey.into()),
        }
    }

    fn inner(&self) -> &dyn Cipher {
        match self {
            Self::Mirror(cipher) => cipher,
            Self::Secure(cipher) => cipher,
        }
    }
}

impl Cipher for CipherBackend {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.inner().encrypt(plaintext)
    }

    fn decrypt(&self, token: &str) -> Result<String> {
        self.inner().decrypt(token)
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
