//! Errors that abort a comparison.
//!
//! Differences between expected and actual are never errors; they are the
//! regular output of a comparison. A [`DiffError`] means the comparison
//! itself could not be carried out, and no partial result is produced.

use std::fmt;

use crate::Tag;

/// Error returned when a comparison cannot be performed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiffError {
    /// A repeat expectation was applied to something that is not a sequence.
    NotASequence {
        /// The runtime tag of the value that was found instead.
        found: Tag,
    },

    /// A repeat expectation's lower bound exceeds its upper bound.
    InvalidSizeBounds {
        /// The lower bound.
        min: usize,
        /// The upper bound.
        max: usize,
    },

    /// A color scheme was requested by a name that is not registered.
    UnknownColorScheme {
        /// The requested name.
        name: String,
    },

    /// A shared value was reached again while it was still being compared.
    CyclicStructure,

    /// A text pattern failed to compile.
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// The compiler's explanation.
        message: String,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::NotASequence { found } => {
                write!(f, "repeat expectation applied to a {found}, not a sequence")
            }
            DiffError::InvalidSizeBounds { min, max } => {
                write!(f, "invalid repeat bounds: min {min} is greater than max {max}")
            }
            DiffError::UnknownColorScheme { name } => {
                write!(f, "unknown color scheme `{name}`")
            }
            DiffError::CyclicStructure => {
                write!(f, "cyclic structure: a shared value contains itself")
            }
            DiffError::InvalidPattern { pattern, message } => {
                write!(f, "invalid text pattern /{pattern}/: {message}")
            }
        }
    }
}

impl core::error::Error for DiffError {}
