//! Error types and context management for solver operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Input did not contain exactly sixteen tokens
    MalformedInput {
        /// Board file the tokens were read from, when known
        path: Option<PathBuf>,
        /// Number of tokens actually found
        found: usize,
    },

    /// A token could not be read as an integer tile value
    InvalidToken {
        /// Board file the token was read from, when known
        path: Option<PathBuf>,
        /// Zero-based position of the token in the input
        position: usize,
        /// The offending token
        token: String,
    },

    /// Sixteen integers that do not form a permutation of 1..=16
    ///
    /// Occurs when a tile value is:
    /// - Outside the range 1..=16
    /// - Present more than once
    InvalidBoard {
        /// Board file the tiles were read from, when known
        path: Option<PathBuf>,
        /// Description of what's wrong with the tiles
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

fn describe_origin(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| format!(" in '{}'", p.display()))
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { path, found } => {
                write!(
                    f,
                    "Malformed input{}: expected 16 tiles, found {found}",
                    describe_origin(path.as_ref())
                )
            }
            Self::InvalidToken {
                path,
                position,
                token,
            } => {
                write!(
                    f,
                    "Invalid token '{token}' at position {position}{}",
                    describe_origin(path.as_ref())
                )
            }
            Self::InvalidBoard { path, reason } => {
                write!(
                    f,
                    "Invalid board{}: {reason}",
                    describe_origin(path.as_ref())
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Attaches the originating board file to input errors
pub trait WithPath<T> {
    /// Record `path` on errors that describe board input
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<SolverError>,
{
    fn with_path(self, origin: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only input errors carry an optional origin
            match &mut error {
                SolverError::MalformedInput { path, .. }
                | SolverError::InvalidToken { path, .. }
                | SolverError::InvalidBoard { path, .. } => {
                    *path = Some(origin.to_path_buf());
                }
                SolverError::FileSystem { path, .. } => {
                    *path = origin.to_path_buf();
                }
                SolverError::InvalidParameter { .. } => {}
            }
            error
        })
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid board error without a known origin
pub fn invalid_board(reason: &impl ToString) -> SolverError {
    SolverError::InvalidBoard {
        path: None,
        reason: reason.to_string(),
    }
}
