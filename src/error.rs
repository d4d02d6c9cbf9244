//! Error types for reading a definitions source.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a definitions file.
///
/// Both variants are recovered at the application boundary: the caller shows
/// a diagnostic and continues with an empty item set.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("alias file not available: {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("alias file is not valid UTF-8: {}", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ExtractError {
    /// Path of the source that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExtractError::SourceUnavailable { path, .. } | ExtractError::Decoding { path, .. } => {
                path
            }
        }
    }

    /// True when the file simply does not exist, as opposed to being unreadable.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            ExtractError::SourceUnavailable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
