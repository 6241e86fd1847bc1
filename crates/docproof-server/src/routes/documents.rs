//! Document registration, lookup, and revocation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use uuid::Uuid;

use docproof_core::hash::is_well_formed_hash;
use docproof_core::types::{Document, NewDocument, RegisterDocumentResponse, RevokeResponse};

use crate::error::AppError;
use crate::store::DocumentStore;

/// Creates the documents router.
pub fn router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route("/", get(list_documents).post(register_document))
        .route("/{id}", get(get_document))
        .route("/{id}/revoke", patch(revoke_document))
        .with_state(store)
}

/// GET /api/documents
///
/// Lists all registered documents, newest first.
async fn list_documents(State(store): State<Arc<DocumentStore>>) -> Json<Vec<Document>> {
    Json(store.all_documents())
}

/// GET /api/documents/{id}
async fn get_document(
    State(store): State<Arc<DocumentStore>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Document>, AppError> {
    store
        .document(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document not found: {}", id)))
}

/// POST /api/documents
///
/// Registers a new document record. The client computes the content hash
/// before submitting; the server never sees the file itself.
/// Returns 400 on validation failure or duplicate hash, 201 on success.
async fn register_document(
    State(store): State<Arc<DocumentStore>>,
    Json(new): Json<NewDocument>,
) -> Result<(StatusCode, Json<RegisterDocumentResponse>), AppError> {
    validate_new_document(&new)?;

    let document = store.create_document(new)?;
    tracing::info!(hash = %document.document_hash, "Registered document");

    Ok((
        StatusCode::CREATED,
        Json(RegisterDocumentResponse {
            success: true,
            document,
        }),
    ))
}

/// PATCH /api/documents/{hash}/revoke
///
/// Marks the document with the given hash as revoked. Idempotent.
async fn revoke_document(
    State(store): State<Arc<DocumentStore>>,
    Path(hash): Path<String>,
) -> Result<Json<RevokeResponse>, AppError> {
    if !store.revoke_document(&hash) {
        return Err(AppError::NotFound(format!(
            "No document registered for hash '{}'",
            hash
        )));
    }
    tracing::info!(hash = %hash, "Revoked document");

    Ok(Json(RevokeResponse {
        success: true,
        message: "Document revoked successfully".to_string(),
    }))
}

/// Validates the user-supplied fields of a registration request.
fn validate_new_document(new: &NewDocument) -> Result<(), AppError> {
    if new.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".to_string()));
    }
    if new.filename.trim().is_empty() {
        return Err(AppError::Validation(
            "Filename must not be empty".to_string(),
        ));
    }
    if new.issuer.trim().is_empty() {
        return Err(AppError::Validation("Issuer must not be empty".to_string()));
    }
    if !is_well_formed_hash(&new.document_hash) {
        return Err(AppError::Validation(format!(
            "Invalid document hash '{}': expected 64 hex characters",
            new.document_hash
        )));
    }
    Ok(())
}
