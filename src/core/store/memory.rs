//! In-memory token log, for embedding and tests.

use std::cell::RefCell;

use super::Store;
use crate::error::Result;

/// Token log held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct Memory {
    lines: RefCell<Vec<String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing lines, as if read from a file.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: RefCell::new(lines.into_iter().map(Into::into).collect()),
        }
    }
}

impl Store for Memory {
    fn append(&self, token: &str) -> Result<()> {
        self.lines.borrow_mut().push(token.to_string());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<String>> {
        Ok(self
            .lines
            .borrow()
            .iter()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
