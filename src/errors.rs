// File: src/errors.rs
//! Error taxonomy for a conversion run.
//!
//! Every failure is carried as a [`ConvertError`] up to the binary, which maps
//! it to a process exit code exactly once via [`ConvertError::exit_code`].

use std::io;
use std::path::{Path, PathBuf};

/// Crate-wide result type, defaulting to [`ConvertError`].
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Exit code for a successful run, including "no words to process".
pub const EXIT_OK: i32 = 0;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// No input path was given.
    #[error("no input file given")]
    Usage,

    #[error("The specified file does not exist! (2 - No such file or directory): {}", .0.display())]
    NotFound(PathBuf),

    /// Used for both the input and the output side.
    #[error("Could not access {} (13 - Permission denied)", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The input's base name does not follow `chat_<id>.<ext>`.
    #[error("'{0}' does not follow the chat_<id>.<ext> naming convention")]
    MalformedFilename(String),

    /// The pickle decoded, but not into a word database.
    #[error("legacy database is malformed: {0}")]
    MalformedLegacy(String),

    #[error("could not decode legacy database: {0}")]
    Decode(#[from] serde_pickle::Error),

    #[error("could not encode chain file: {0}")]
    Encode(#[from] serde_json::Error),

    /// The produced record breaks one of the chain format's invariants.
    #[error("converted record is invalid: {0}")]
    InvalidRecord(String),

    #[error("Something went wrong trying to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    PathPersist(#[from] tempfile::PersistError),
}

impl ConvertError {
    /// Classifies an I/O failure that happened while opening `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classifies an I/O failure on the output side. Only a permission
    /// problem has its own exit code there.
    pub fn from_output_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub(crate) fn malformed_legacy<S: Into<String>>(msg: S) -> Self {
        Self::MalformedLegacy(msg.into())
    }

    pub(crate) fn invalid_record<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 1,
            Self::NotFound(_) => 2,
            Self::PermissionDenied { .. } => 3,
            Self::MalformedFilename(_) => 4,
            Self::MalformedLegacy(_) | Self::Decode(_) => 5,
            Self::PathPersist(e) if e.error.kind() == io::ErrorKind::PermissionDenied => 3,
            Self::Encode(_) | Self::InvalidRecord(_) | Self::Io { .. } | Self::PathPersist(_) => 6,
        }
    }
}
