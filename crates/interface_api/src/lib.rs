//! HTTP API Layer
//!
//! This crate exposes the claims store over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims plus root and health endpoints
//! - **Middleware**: Request id propagation, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, new_shared_store};
//!
//! let app = create_router(new_shared_store());
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use domain_claims::ClaimStore;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::request_logging;
use crate::handlers::{claims, health};

/// The claim store shared by all handlers
///
/// A single lock guards both identifier allocation and the collection.
pub type SharedClaimStore = Arc<RwLock<ClaimStore>>;

/// Creates an empty shared store
pub fn new_shared_store() -> SharedClaimStore {
    Arc::new(RwLock::new(ClaimStore::new()))
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: SharedClaimStore,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Claim store the handlers read and write
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(claims: SharedClaimStore) -> Router {
    let state = AppState { claims };

    let public_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check));

    let claims_routes = Router::new()
        .route("/claims", get(claims::list_claims).post(claims::create_claim))
        .route(
            "/claims/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        );

    Router::new()
        .merge(public_routes)
        .merge(claims_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_logging))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
