//! # Transaction Routes
//!
//! The method × path contract for the five CRUD operations, with the
//! credential gate layered ahead of routing and an unmatched-route
//! fallback. Id segments are validated in the handlers so a non-numeric
//! segment is a 400, while any other path shape falls through to 404.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::CredentialTable;
use crate::observability::Logger;
use crate::store::{Fields, Record, TransactionStore};

use super::errors::{ApiError, ApiResult};
use super::response::{CreateResponse, DeleteResponse, ListResponse, UpdateResponse};

/// State shared by the gate and every handler.
pub struct AppState {
    pub store: TransactionStore,
    pub credentials: CredentialTable,
}

impl AppState {
    pub fn new(store: TransactionStore, credentials: CredentialTable) -> Self {
        Self { store, credentials }
    }
}

/// Build the transaction router.
///
/// The credential gate wraps every route, the fallback included, so an
/// unmatched path with bad credentials is still a 401.
pub fn transaction_routes(state: Arc<AppState>) -> Router {
    // Unlisted methods on matched paths fall through to the same 404 as
    // unmatched paths, never a bare 405.
    Router::new()
        .route(
            "/transactions",
            get(list_transactions_handler)
                .post(create_transaction_handler)
                .fallback(unmatched_route_handler),
        )
        .route(
            "/transactions/",
            get(list_transactions_handler)
                .post(create_transaction_handler)
                .fallback(unmatched_route_handler),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction_handler)
                .put(update_transaction_handler)
                .delete(delete_transaction_handler)
                .fallback(unmatched_route_handler),
        )
        .fallback(unmatched_route_handler)
        .layer(middleware::from_fn_with_state(state.clone(), credential_gate))
        .with_state(state)
}

/// Reject the request before any routing when the credential check fails.
async fn credential_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    match state.credentials.authorize(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            let reason = format!("{:?}", err);
            Logger::warn("AUTH_REJECTED", &[("reason", reason.as_str())]);
            ApiError::from(err).into_response()
        }
    }
}

async fn list_transactions_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ListResponse>> {
    let transactions = state.store.list()?;
    Ok(Json(ListResponse::new(transactions)))
}

async fn get_transaction_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Record>> {
    let id = parse_transaction_id(&id)?;
    let record = state.store.get(id)?;
    Ok(Json(record))
}

async fn create_transaction_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreateResponse>)> {
    let fields = parse_body(&body)?;
    let record = state.store.create(fields)?;
    Ok((StatusCode::CREATED, Json(CreateResponse::new(record))))
}

async fn update_transaction_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<UpdateResponse>> {
    let id = parse_transaction_id(&id)?;
    let fields = parse_body(&body)?;
    let record = state.store.update(id, fields)?;
    Ok(Json(UpdateResponse::new(record)))
}

async fn delete_transaction_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_transaction_id(&id)?;
    let record = state.store.delete(id)?;
    Ok(Json(DeleteResponse::new(record)))
}

async fn unmatched_route_handler() -> ApiError {
    ApiError::RouteNotFound
}

/// Valid ids are all-digit path segments; anything else is a 400, never a
/// 404.
fn parse_transaction_id(segment: &str) -> ApiResult<u64> {
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::InvalidId);
    }
    segment.parse::<u64>().map_err(|_| ApiError::InvalidId)
}

/// Empty bodies and non-object JSON are rejected before touching the store.
fn parse_body(body: &Bytes) -> ApiResult<Fields> {
    if body.is_empty() {
        return Err(ApiError::NoData);
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(fields)) => Ok(fields),
        _ => Err(ApiError::MalformedPayload),
    }
}
