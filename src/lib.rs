//! Passforge - random passwords, strength checks and an encrypted vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate      # Generate (and optionally save) a password
//! │   ├── check         # Score a password and list recommendations
//! │   ├── vault         # Save and list stored passwords
//! │   ├── menu          # Interactive menu
//! │   ├── banner        # ASCII art for the menu
//! │   ├── completions   # Shell completion scripts
//! │   └── output        # Terminal rendering helpers
//! └── core/             # Core library components
//!     ├── config        # config.toml management
//!     ├── generator     # Character-class password generator
//!     ├── strength/     # Rule-based strength evaluator
//!     ├── cipher/       # Vault codec backends
//!     │   ├── mod       # Cipher trait
//!     │   ├── mirror    # Legacy AES-256-CBC format
//!     │   └── secure    # AES-256-GCM with external key
//!     ├── store/        # Append-only token log
//!     │   ├── mod       # Store trait
//!     │   ├── fs        # Filesystem implementation
//!     │   └── memory    # In-memory implementation
//!     └── vault         # Cipher + store glue
//! ```
//!
//! # Features
//!
//! - Cryptographically secure password generation
//! - Eleven-rule strength scoring with remediation hints
//! - Legacy-compatible vault format plus an authenticated secure mode
//! - Pluggable deny-lists, ciphers and stores

pub mod cli;
pub mod core;
pub mod error;
