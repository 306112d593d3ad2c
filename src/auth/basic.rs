//! # Basic Credential Checking
//!
//! Parses the `Authorization: Basic ...` header and verifies the decoded
//! `user:password` pair against the configured credential table.
//!
//! All secret comparisons are constant-time.

use std::fmt;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::Deserialize;
use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};

/// One username/password pair from configuration.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The fixed set of pairs the gate accepts.
///
/// Stateless: every request is checked against the table from scratch, no
/// sessions or tokens.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the `Authorization` header of a request.
    ///
    /// Every failure shape — missing header, wrong scheme, undecodable
    /// base64, no `user:password` split, mismatched pair — is an
    /// authentication failure; none is reported distinctly to the client.
    pub fn authorize(&self, headers: &HeaderMap) -> AuthResult<()> {
        let header = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingCredentials)?;
        let value = header.to_str().map_err(|_| AuthError::MalformedCredentials)?;
        let encoded = value
            .strip_prefix("Basic ")
            .ok_or(AuthError::MalformedCredentials)?;
        let decoded = base64::Engine::decode(
            &base64::engine::general_purpose::STANDARD,
            encoded.trim(),
        )
        .map_err(|_| AuthError::MalformedCredentials)?;
        let pair = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;
        let (username, password) = pair
            .split_once(':')
            .ok_or(AuthError::MalformedCredentials)?;

        if self.verify(username, password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Exact match against one table entry.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries.iter().any(|entry| {
            constant_time_str_eq(&entry.username, username)
                & constant_time_str_eq(&entry.password, password)
        })
    }
}

/// Constant-time comparison of two byte slices
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
