//! Token storage.
//!
//! The vault is an append-only log: one base64 token per line, in insertion
//! order. Entries are never rewritten or removed.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `sqlite.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! impl Store for Remote {
//!     fn append(&self, token: &str) -> Result<()> {
//!         // Push one line to the remote log
//!     }
//!     fn read_all(&self) -> Result<Vec<String>> {
//!         // Fetch every line in order
//!     }
//! }
//! ```

use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Append-only token log.
pub trait Store {
    /// Append one token as a new line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the underlying storage fails.
    fn append(&self, token: &str) -> Result<()>;

    /// Every stored token in insertion order. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the underlying storage fails.
    fn read_all(&self) -> Result<Vec<String>>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
