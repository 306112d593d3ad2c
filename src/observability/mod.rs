//! # Observability
//!
//! Structured logging for startup, ingestion outcomes, and the credential
//! gate.

mod logger;

pub use logger::{Logger, Severity};
