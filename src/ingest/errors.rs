//! # Ingestion Errors
//!
//! Error types for the SMS export extraction.

use thiserror::Error;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Extraction and artifact errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file absent at the configured path.
    #[error("SMS export not found: {0}")]
    FileNotFound(String),

    /// Export present but not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// Export or artifact I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
