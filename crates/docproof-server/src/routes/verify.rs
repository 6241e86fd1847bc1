//! Hash verification endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use docproof_core::hash::is_well_formed_hash;
use docproof_core::types::VerificationResult;

use crate::error::AppError;
use crate::store::DocumentStore;

/// Request body for POST /api/verify.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Content hash to check, 64 hex characters (any case).
    pub hash: String,

    /// Optional identifier of the checking party. A synthetic placeholder
    /// address is recorded when absent.
    #[serde(default)]
    pub verifier_address: Option<String>,
}

/// Creates the verify router.
pub fn router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route("/", post(verify_by_body))
        .route("/{hash}", get(verify_by_path))
        .with_state(store)
}

/// GET /api/verify/{hash}
///
/// Checks a hash against the registry. A check that finds a document is
/// itself recorded as a verification event; checking an unknown hash is a
/// normal result, not an error, and records nothing.
async fn verify_by_path(
    State(store): State<Arc<DocumentStore>>,
    Path(hash): Path<String>,
) -> Result<Json<VerificationResult>, AppError> {
    require_well_formed(&hash)?;
    Ok(Json(store.verify_document(&hash, None)))
}

/// POST /api/verify
///
/// Same contract as the GET form, with the hash (and an optional verifier
/// address) carried in the request body.
async fn verify_by_body(
    State(store): State<Arc<DocumentStore>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerificationResult>, AppError> {
    require_well_formed(&request.hash)?;
    Ok(Json(
        store.verify_document(&request.hash, request.verifier_address),
    ))
}

fn require_well_formed(hash: &str) -> Result<(), AppError> {
    if !is_well_formed_hash(hash) {
        return Err(AppError::Validation(format!(
            "Invalid hash format: '{}'",
            hash
        )));
    }
    Ok(())
}
