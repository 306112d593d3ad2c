//! # HTTP Server
//!
//! Binds the transaction router, the CORS layer, and the configured
//! address into a serving loop.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpConfig;
use super::routes::{transaction_routes, AppState};

/// HTTP server for the transaction API
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server with default configuration
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_config(HttpConfig::default(), state)
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: HttpConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the router with the CORS layer applied
    fn build_router(config: &HttpConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive `*`
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        transaction_routes(state).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        println!("MoMo API server running on http://{}", addr);
        println!("Available endpoints:");
        println!("  GET    /transactions        - List all transactions");
        println!("  GET    /transactions/:id    - Get specific transaction");
        println!("  POST   /transactions        - Create new transaction");
        println!("  PUT    /transactions/:id    - Update transaction");
        println!("  DELETE /transactions/:id    - Delete transaction");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
