//! Error types for mdtohtml library.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdtohtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// File system operation that failed, used to give I/O errors context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Reading,
    Writing,
    CreatingDirectory,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoAction::Reading => write!(f, "reading"),
            IoAction::Writing => write!(f, "writing"),
            IoAction::CreatingDirectory => write!(f, "creating directory"),
        }
    }
}

/// Main error type for mdtohtml library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file (or path) does not exist.
    #[error("Input does not exist: file '{}'", .0.display())]
    InputNotExist(PathBuf),

    /// The batch input directory does not exist.
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotExist(PathBuf),

    /// I/O error while reading, writing or creating a path.
    #[error("Error {action} {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        action: IoAction,
        #[source]
        source: io::Error,
    },

    /// The Markdown engine failed to produce HTML.
    #[error("Error converting markdown: {0}")]
    Conversion(String),

    /// The batch file pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Recursive directory traversal failed.
    #[error("Error walking directory {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// A batch run aborted on its first failing file.
    #[error(
        "Error converting '{}' ({converted} files converted before failure): {source}",
        .path.display()
    )]
    Batch {
        path: PathBuf,
        converted: usize,
        #[source]
        source: Box<Error>,
    },

    /// A document failed validation.
    #[error("Validation failed for {}: {source}", .path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps an I/O error with the path and operation that produced it.
    pub fn io(path: impl Into<PathBuf>, action: IoAction, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            action,
            source,
        }
    }

    /// Returns the innermost error, unwrapping batch and validation context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Batch { source, .. } | Error::Validation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        Error::Walk {
            path,
            message: err.to_string(),
        }
    }
}
