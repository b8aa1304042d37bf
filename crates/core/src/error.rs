//! Error types for the promptgrab domain.
//!
//! The catalog and assembler are total functions and never fail; these
//! errors come from lookups and from validating author input.

use thiserror::Error;

/// The top-level error type for domain operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template '{id}': {reason}")]
    InvalidTemplate { id: String, reason: String },

    #[error("Template '{0}' is built in and cannot be modified")]
    NotEditable(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
