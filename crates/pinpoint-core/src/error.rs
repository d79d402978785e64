use core::result::Result as CoreResult;
use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur in the core library.
///
/// A keyword that matches nothing is not an error; the only failure mode is
/// a document that cannot be read.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    FileAccess {
        /// Path of the document that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: IoError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_error_display() {
        let error = Error::FileAccess {
            path: PathBuf::from("missing/file.css"),
            source: IoError::new(ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            error.to_string(),
            "failed to read missing/file.css: no such file"
        );
    }

    #[test]
    fn test_error_source_is_preserved() {
        let error = Error::FileAccess {
            path: PathBuf::from("missing/file.css"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        let Error::FileAccess { source, .. } = &error;
        assert_eq!(source.kind(), ErrorKind::PermissionDenied);
    }
}
