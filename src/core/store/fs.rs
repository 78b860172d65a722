//! Filesystem-backed token log.
//!
//! A UTF-8 text file with one token per line. The parent directory is created
//! on first append; on Unix the file is created with mode 0600.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::Store;
use crate::error::{Result, StoreError};

/// Text file with one token per line.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn open_for_append(&self) -> io::Result<fs::File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true).append(true);

        // Restrict permissions on newly created vault files (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options.open(&self.path)
    }
}

impl Store for Filesystem {
    fn append(&self, token: &str) -> Result<()> {
        debug!(path = %self.path.display(), "appending token");

        let mut file = self.open_for_append().map_err(|e| self.unavailable(e))?;
        // One write per line keeps concurrent appends from interleaving.
        file.write_all(format!("{}\n", token).as_bytes())
            .map_err(|e| self.unavailable(e))?;
        file.flush().map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        debug!(path = %self.path.display(), "reading tokens");

        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(e).into()),
        };

        // Lines are decoded one at a time. Invalid UTF-8 becomes U+FFFD, which
        // no codec accepts, so the entry is flagged instead of failing the read.
        let tokens: Vec<String> = contents
            .split(|&b| b == b'\n')
            .map(String::from_utf8_lossy)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        trace!(count = tokens.len(), "read tokens");
        Ok(tokens)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
