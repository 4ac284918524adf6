//! Errors for turning user-typed filter text into filter values.
//!
//! Filtering itself never fails; only parsing can.

use thiserror::Error;

/// A range or other filter value could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// Range text without the `-` between the bounds
    #[error("Range '{input}' must have the form <from>-<to>")]
    MissingSeparator { input: String },

    /// One side of a range is not a non-negative integer
    #[error("Invalid bound '{value}' in range '{input}'")]
    InvalidBound { input: String, value: String },
}

/// Convenience type alias for parse results in this crate
pub type Result<T> = std::result::Result<T, FilterParseError>;
