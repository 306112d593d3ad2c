//! # Auth Errors
//!
//! Error types for the credential gate.

use thiserror::Error;

/// Result type for credential checks
pub type AuthResult<T> = Result<T, AuthError>;

/// Challenge value carried on every 401 response.
pub const BASIC_CHALLENGE: &str = "Basic realm=\"momo-api\"";

/// Credential-gate failures.
///
/// Deliberately indistinguishable to the client: every variant renders the
/// same message and maps to 401. The variants exist for logs and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Authentication required")]
    MissingCredentials,

    /// Header present but not in `Basic <base64(user:password)>` form.
    #[error("Authentication required")]
    MalformedCredentials,

    /// Well-formed pair that matches no table entry.
    #[error("Authentication required")]
    InvalidCredentials,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        401
    }
}
