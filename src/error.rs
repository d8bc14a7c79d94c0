//! Error types.
//!
//! The resolution core itself never errors: absent data degrades to
//! `None`, provenance falls back to `inferred`, and option merging
//! returns the defaults unchanged. The only fallible surface is
//! validating a question catalog at construction time.

use thiserror::Error;

/// Problems detected while validating a question catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Question field name cannot be empty")]
    EmptyFieldName,

    #[error("Duplicate question for field '{field}'")]
    DuplicateField { field: String },

    #[error("Question '{field}' has an option with an empty value")]
    EmptyOptionValue { field: String },

    #[error("Choice question '{field}' has no options")]
    MissingOptions { field: String },
}

/// Result type alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;
