use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An ordered sequence of text lines read from a file.
///
/// Loaded once, scanned once per keyword, then discarded. Lines are
/// addressed 1-based to match editor conventions.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Reads the file at `path` and splits it into lines.
    ///
    /// A trailing newline does not produce a final empty line.
    ///
    /// # Errors
    /// Returns [`Error::FileAccess`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let lines: Vec<String> = content.lines().map(str::to_owned).collect();
        tracing::debug!("loaded {} ({} lines)", path.display(), lines.len());

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    /// Builds a document from lines already in memory.
    #[must_use]
    pub fn from_lines(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    /// Path the document was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's lines in file order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Total number of lines in the document.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
