//! Error types for the validation boundary around the generator
//!
//! Generation itself is total: empty candidate sets, missing automaton
//! entries and disjoint anchor rows all resolve to valid outputs. Errors only
//! arise when caller-supplied parameters or output destinations are rejected.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum PhonoError {
    /// Drift coefficient is NaN or outside the unit interval
    InvalidDrift {
        /// Provided drift value
        value: f64,
    },

    /// Transition weight is negative or not finite
    InvalidWeight {
        /// Previous symbol keying the offending row
        previous: char,
        /// Next symbol carrying the offending weight
        next: char,
        /// Provided weight
        weight: f64,
    },

    /// Generation parameter validation failed
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

impl fmt::Display for PhonoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDrift { value } => {
                write!(f, "Invalid drift {value}: must lie within [0, 1]")
            }
            Self::InvalidWeight {
                previous,
                next,
                weight,
            } => {
                write!(
                    f,
                    "Invalid transition weight {weight} for '{previous}' -> '{next}': must be finite and non-negative"
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

impl std::error::Error for PhonoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, PhonoError>;

impl From<std::io::Error> for PhonoError {
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
) -> PhonoError {
    PhonoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PhonoError {
    PhonoError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
