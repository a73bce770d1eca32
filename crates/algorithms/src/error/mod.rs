//! Error handling for the digest primitives

use core::fmt;

use chdigest_api::Error as CoreError;

/// The error type for digest primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A requested sub-range does not fit inside the supplied buffer
    Range {
        /// Context where the range error occurred
        context: &'static str,
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        length: usize,
        /// Length of the buffer the range was taken from
        available: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for digest primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Range {
                context,
                offset,
                length,
                available,
            } => {
                write!(
                    f,
                    "Invalid range for {}: {} bytes at offset {} exceed buffer of {} bytes",
                    context, length, offset, available
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Range {
                context,
                offset,
                length,
                available,
            } => CoreError::InvalidRange {
                context,
                offset,
                length,
                available,
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use chdigest_api::error::ResultExt;

pub mod validate;
