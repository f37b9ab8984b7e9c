//! Error types for registrar.

use thiserror::Error;

use crate::record::RecordKind;
use crate::store::StoreError;
use crate::validate::ValidationError;

/// Errors that can occur in registrar operations.
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No {kind} record {target}")]
    RecordNotFound { kind: RecordKind, target: String },

    #[error("Page '{0}' has no form to submit")]
    NoForm(String),

    #[error("Could not determine which page is active")]
    UnknownPage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registrar operations.
pub type RegistrarResult<T> = Result<T, RegistrarError>;
