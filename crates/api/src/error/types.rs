//! Error type definitions for digest operations

#[cfg(feature = "std")]
use thiserror::Error as ThisError;

/// Primary error type for digest operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(ThisError))]
pub enum Error {
    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A sub-range of an input buffer falls outside the buffer
    #[cfg_attr(
        feature = "std",
        error("{context}: range {offset}+{length} exceeds buffer of {available} bytes")
    )]
    InvalidRange {
        context: &'static str,
        offset: usize,
        length: usize,
        available: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    InvalidParameter {
        context: &'static str,
        message: &'static str,
    },

    /// Other error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    Other {
        context: &'static str,
        message: &'static str,
    },
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidRange {
                offset,
                length,
                available,
                ..
            } => Self::InvalidRange {
                context,
                offset,
                length,
                available,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidRange { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            Self::InvalidRange {
                context,
                offset,
                length,
                available,
            } => {
                write!(
                    f,
                    "{}: range {}+{} exceeds buffer of {} bytes",
                    context, offset, length, available
                )
            }
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}
