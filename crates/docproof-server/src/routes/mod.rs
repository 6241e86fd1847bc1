//! API routes for the DocProof server.

pub mod documents;
pub mod stats;
pub mod verify;

use std::sync::Arc;

use axum::Router;

use crate::store::DocumentStore;

/// Creates the main API router with all routes mounted.
pub fn create_router(store: Arc<DocumentStore>) -> Router {
    Router::new().nest("/api", api_routes(store))
}

/// Creates the API routes.
fn api_routes(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .nest("/documents", documents::router(store.clone()))
        .nest("/verify", verify::router(store.clone()))
        .nest("/stats", stats::router(store))
}
