//! Error types for the save slot.
//!
//! These never reach the player: the slot logs them and degrades to
//! "no save present". They are public so tools (the `save` subcommand) can
//! report what went wrong.

use std::fmt;
use std::io;

/// Failure while reading or writing the save slot.
#[derive(Debug)]
pub enum StorageError {
    /// The file system refused the operation.
    Io(io::Error),
    /// The slot exists but does not hold a valid save record.
    Corrupt(serde_json::Error),
    /// No per-user data directory could be resolved.
    NoProjectDir,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "save slot I/O error: {e}"),
            StorageError::Corrupt(e) => write!(f, "save slot is corrupt: {e}"),
            StorageError::NoProjectDir => write!(f, "could not resolve a data directory"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Corrupt(e) => Some(e),
            StorageError::NoProjectDir => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Corrupt(e)
    }
}

/// Result type for save slot operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = StorageError::NoProjectDir;
        assert_eq!(e.to_string(), "could not resolve a data directory");

        let io = StorageError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(io.to_string().contains("nope"));

        let bad = serde_json::from_str::<u32>("{").unwrap_err();
        let corrupt = StorageError::from(bad);
        assert!(corrupt.to_string().starts_with("save slot is corrupt"));
    }
}
