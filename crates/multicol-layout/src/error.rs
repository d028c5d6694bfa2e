//! Layout failures.
//!
//! Every error aborts the whole pass: no partial geometry is produced, and
//! retrying with the same inputs reproduces the same error.

use std::fmt;

/// Result alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Failures raised by sizing, assembly and row customization.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The available width is not a finite positive number.
    InvalidWidth { width: f64 },
    /// The columns cannot be satisfied within the available width.
    ///
    /// `reason` always carries the numbers involved.
    InsufficientWidth { reason: String },
    /// A row was re-customized with a different number of columns than it
    /// was built with.
    ColumnCountMismatch { expected: usize, actual: usize },
    /// A column policy carries a negative or non-finite dimension.
    InvalidPolicy { index: usize, reason: String },
}

impl LayoutError {
    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientWidth {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { width } => {
                write!(f, "available width must be positive (width={width})")
            }
            Self::InsufficientWidth { reason } => write!(f, "insufficient width: {reason}"),
            Self::ColumnCountMismatch { expected, actual } => write!(
                f,
                "column count mismatch: expected {expected} columns, got {actual} columns"
            ),
            Self::InvalidPolicy { index, reason } => {
                write!(f, "invalid policy for column {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
