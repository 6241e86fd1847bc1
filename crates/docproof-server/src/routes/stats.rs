//! Registry statistics endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use docproof_core::types::DocumentStats;

use crate::store::DocumentStore;

/// Creates the stats router.
pub fn router(store: Arc<DocumentStore>) -> Router {
    Router::new().route("/", get(get_stats)).with_state(store)
}

/// GET /api/stats
///
/// Returns registry-wide counts, computed on demand.
async fn get_stats(State(store): State<Arc<DocumentStore>>) -> Json<DocumentStats> {
    Json(store.stats())
}
