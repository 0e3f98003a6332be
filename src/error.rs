//! Error types for scanning and writing output

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A directory could not be listed. The subtree is skipped and the scan
/// continues, so this is reported as a warning rather than returned.
#[derive(Debug, Error)]
#[error("cannot read directory {path}: {source}")]
pub struct AccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl AccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The output destination could not be created or written.
#[derive(Debug, Error)]
#[error("cannot write output to {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_error_names_directory() {
        let err = AccessError::new(
            "/tmp/project/sub",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/project/sub"), "got: {}", message);
        assert_eq!(err.path(), Path::new("/tmp/project/sub"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let err = WriteError::new("out.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("cannot write output to out.md"));
        assert!(err.source().is_some());
    }
}
