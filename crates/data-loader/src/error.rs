//! Error types for the data-loader crate.
//!
//! Loading is the only fallible stage of the workspace: once recipes are in
//! memory, filtering never fails.

use thiserror::Error;

/// Errors that can occur while reading recipe documents
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON or does not have the expected shape
    #[error("JSON error in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field} on recipe {recipe_id}: {value}")]
    InvalidValue {
        recipe_id: u32,
        field: String,
        value: String,
    },

    /// The same recipe id appears twice in one collection
    #[error("Duplicate recipe id {id} in {collection}")]
    DuplicateId { collection: String, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
