use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A header file held in memory.
#[derive(Debug)]
pub struct HeaderSource {
    pub path: PathBuf,
    pub content: String,
}

impl HeaderSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read header {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Create a HeaderSource from a string, using the given path for display purposes.
    pub fn from_string(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    /// Lines paired with their 1-indexed line number, without terminators.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content.lines().enumerate().map(|(i, line)| (i + 1, line))
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().unwrap_or("<non-utf8 path>")
    }
}
