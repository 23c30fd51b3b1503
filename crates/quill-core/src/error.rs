//! Store error handling
//!
//! Typed errors for driver operations. Filesystem failures carry the path
//! involved and the original I/O error; JSON failures are passed through
//! unchanged.

use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Collection name was empty
    #[error("missing collection - no place to save record")]
    MissingCollection,

    /// Resource name was empty
    #[error("missing resource - unable to save record")]
    MissingResource,

    /// Underlying filesystem operation failed
    #[error("file I/O error at path {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Delete target does not exist as a directory or as a `.json` file
    #[error("file or directory not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Value could not be encoded to, or decoded from, JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred at
    pub fn file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Build a not-found error for a logical `collection/resource` path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        StoreError::NotFound {
            path: path.into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }

    /// The path associated with the error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            StoreError::FileIo { path, .. } | StoreError::NotFound { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }

    /// The original underlying error, if any
    pub fn original_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::FileIo { source, .. } | StoreError::NotFound { source, .. } => {
                Some(source)
            }
            StoreError::Json(err) => Some(err),
            _ => None,
        }
    }

    /// True for lookup misses and for I/O failures of kind `NotFound`
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound { .. } => true,
            StoreError::FileIo { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True for request-validation failures (empty names)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingCollection | StoreError::MissingResource
        )
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_io_carries_path_and_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = StoreError::file_io("/db/fish/red.json", io_err);

        assert_eq!(err.path(), Some(Path::new("/db/fish/red.json")));
        let source = err.original_error().unwrap();
        assert!(source.to_string().contains("access denied"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_file_io_not_found_classification() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = StoreError::file_io("/db/fish/ghost.json", io_err);

        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found(Path::new("fish").join("ghost"));

        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(Path::new("fish/ghost")));
        assert!(err.to_string().contains("fish/ghost"));
        assert!(err.original_error().is_some());
    }

    #[test]
    fn test_validation_errors_have_no_path() {
        assert!(StoreError::MissingCollection.path().is_none());
        assert!(StoreError::MissingResource.original_error().is_none());
        assert!(StoreError::MissingCollection.is_validation());
        assert!(StoreError::MissingResource
            .to_string()
            .contains("missing resource"));
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let expected = json_err.to_string();
        let err = StoreError::from(json_err);

        assert_eq!(err.to_string(), expected);
        assert!(err.path().is_none());
    }
}
