//! # Request Gateway
//!
//! HTTP layer over the record store: the credential gate, the routing
//! contract for the five CRUD operations, and JSON serialization of
//! results and errors.

pub mod config;
pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{transaction_routes, AppState};
pub use server::HttpServer;
