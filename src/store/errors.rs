//! # Store Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record with the requested id.
    #[error("Transaction {0} not found")]
    NotFound(u64),

    /// The interior lock was poisoned by a panicking holder.
    #[error("Store lock poisoned")]
    LockPoisoned,
}
