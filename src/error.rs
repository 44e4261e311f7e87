/*!
 * Error types for appmanifest
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// Package file missing or unreadable
    #[error("failed to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Package size could not be determined
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Chunk size was zero or negative
    #[error("invalid md5 chunk size {0}: must be greater than zero")]
    InvalidChunkSize(i64),

    /// I/O failure while hashing (end of stream is not an error)
    #[error("read error while hashing: {0}")]
    Read(#[source] io::Error),

    /// Property list encoding failed
    #[error("failed to encode manifest: {0}")]
    Encode(#[from] plist::Error),

    /// Output sink rejected the encoded document
    #[error("failed to write manifest: {0}")]
    Write(#[source] io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse error grouping used in log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Encoding,
    Configuration,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Encoding => "encoding",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl ManifestError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        // Every core failure is fatal: there is no partial manifest.
        EXIT_FATAL
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            ManifestError::FileOpen { .. } | ManifestError::Stat { .. } | ManifestError::Read(_) => {
                ErrorCategory::Input
            }
            ManifestError::InvalidChunkSize(_) => ErrorCategory::Validation,
            ManifestError::Encode(_) | ManifestError::Write(_) => ErrorCategory::Encoding,
            ManifestError::Config(_) => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message_names_path() {
        let err = ManifestError::FileOpen {
            path: PathBuf::from("/missing/app.pkg"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/app.pkg"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_invalid_chunk_size() {
        let err = ManifestError::InvalidChunkSize(-4);
        assert!(err.to_string().contains("-4"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_write_groups_with_encoding() {
        let err = ManifestError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.category(), ErrorCategory::Encoding);
        assert_eq!(err.category().as_str(), "encoding");
    }

    #[test]
    fn test_all_errors_are_fatal() {
        let errors = [
            ManifestError::InvalidChunkSize(0),
            ManifestError::Read(io::Error::other("boom")),
            ManifestError::Config("bad".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), EXIT_FATAL);
            assert_ne!(err.exit_code(), EXIT_SUCCESS);
        }
    }
}
