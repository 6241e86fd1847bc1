//! In-memory record store for documents and verification events.
//!
//! All state lives behind a single `RwLock`; callers only see the
//! operations below, never the maps themselves. Everything is lost when
//! the process exits.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{Datelike, Utc};
use uuid::Uuid;

use docproof_core::types::{
    Document, DocumentStats, NewDocument, NewVerification, Verification, VerificationResult,
};

use crate::synthetic;

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document with the same content hash is already registered.
    #[error("Document with hash '{hash}' already exists")]
    DuplicateHash { hash: String },
}

/// Fields that can be merged into an existing document.
///
/// `is_revoked` only ever transitions false to true through an update;
/// there is no un-revoke path.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub filename: Option<String>,
    pub description: Option<String>,
    pub ipfs_hash: Option<String>,
    pub is_public: Option<bool>,
    pub is_revoked: Option<bool>,
}

/// In-memory document and verification store.
///
/// Thread-safe via a single `RwLock`: the duplicate-hash check and the
/// insert share one write-lock critical section, so concurrent creates of
/// the same hash cannot race past each other.
pub struct DocumentStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    /// Documents indexed by id.
    documents: HashMap<Uuid, Document>,

    /// Hash index: content hash (lowercase) -> document id.
    by_hash: HashMap<String, Uuid>,

    /// Verification events, in insertion order.
    verifications: Vec<Verification>,
}

impl DocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                documents: HashMap::new(),
                by_hash: HashMap::new(),
                verifications: Vec::new(),
            }),
        }
    }

    /// Registers a new document, assigning its id and creation time.
    ///
    /// Content hashes are stored lowercase; lookups normalize the same
    /// way, so mixed-case input always finds its document.
    pub fn create_document(&self, new: NewDocument) -> Result<Document, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let hash = new.document_hash.to_ascii_lowercase();

        if inner.by_hash.contains_key(&hash) {
            return Err(StoreError::DuplicateHash { hash });
        }

        let document = Document {
            id: Uuid::new_v4(),
            title: new.title,
            filename: new.filename,
            document_hash: hash.clone(),
            ipfs_hash: new.ipfs_hash,
            description: new.description,
            is_public: new.is_public,
            is_revoked: new.is_revoked,
            issuer: new.issuer,
            created_at: Utc::now(),
        };

        inner.by_hash.insert(hash, document.id);
        inner.documents.insert(document.id, document.clone());

        Ok(document)
    }

    /// Point lookup by id.
    pub fn document(&self, id: Uuid) -> Option<Document> {
        let inner = self.inner.read().unwrap();
        inner.documents.get(&id).cloned()
    }

    /// Point lookup by content hash. At most one match, since hashes are
    /// unique among registered documents.
    pub fn document_by_hash(&self, hash: &str) -> Option<Document> {
        let inner = self.inner.read().unwrap();
        inner
            .by_hash
            .get(&hash.to_ascii_lowercase())
            .and_then(|id| inner.documents.get(id))
            .cloned()
    }

    /// All documents, ordered by creation time descending (newest first).
    pub fn all_documents(&self) -> Vec<Document> {
        let inner = self.inner.read().unwrap();
        let mut documents: Vec<Document> = inner.documents.values().cloned().collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        documents
    }

    /// Merges the given fields into an existing document and returns the
    /// updated record, or `None` if the id is unknown.
    pub fn update_document(&self, id: Uuid, update: DocumentUpdate) -> Option<Document> {
        let mut inner = self.inner.write().unwrap();
        let document = inner.documents.get_mut(&id)?;

        if let Some(title) = update.title {
            document.title = title;
        }
        if let Some(filename) = update.filename {
            document.filename = filename;
        }
        if let Some(description) = update.description {
            document.description = Some(description);
        }
        if let Some(ipfs_hash) = update.ipfs_hash {
            document.ipfs_hash = Some(ipfs_hash);
        }
        if let Some(is_public) = update.is_public {
            document.is_public = is_public;
        }
        if let Some(is_revoked) = update.is_revoked {
            // monotonic: once revoked, stays revoked
            document.is_revoked = document.is_revoked || is_revoked;
        }

        Some(document.clone())
    }

    /// Marks the document with the given hash as revoked.
    ///
    /// Returns false for an unknown hash (no-op). Idempotent: revoking an
    /// already-revoked document returns true and changes nothing.
    pub fn revoke_document(&self, hash: &str) -> bool {
        let mut inner = self.inner.write().unwrap();
        let key = hash.to_ascii_lowercase();

        let Some(&id) = inner.by_hash.get(&key) else {
            return false;
        };
        if let Some(document) = inner.documents.get_mut(&id) {
            document.is_revoked = true;
        }
        true
    }

    /// Records a verification event, assigning its id and timestamp.
    pub fn create_verification(&self, new: NewVerification) -> Verification {
        let mut inner = self.inner.write().unwrap();
        let verification = Verification {
            id: Uuid::new_v4(),
            document_hash: new.document_hash.to_ascii_lowercase(),
            verified_at: Utc::now(),
            verifier_address: new.verifier_address,
        };
        inner.verifications.push(verification.clone());
        verification
    }

    /// All verification events recorded for a hash, in insertion order.
    pub fn verifications_by_hash(&self, hash: &str) -> Vec<Verification> {
        let inner = self.inner.read().unwrap();
        let key = hash.to_ascii_lowercase();
        inner
            .verifications
            .iter()
            .filter(|v| v.document_hash == key)
            .cloned()
            .collect()
    }

    /// Checks a hash against the registry.
    ///
    /// An unknown hash yields `{exists: false, isValid: false}` and records
    /// nothing. A known hash records one verification event, attributed to
    /// `verifier_address` or a synthetic placeholder address, and returns
    /// the document with its full verification history including the event
    /// just recorded. Lookup and event insertion share one write lock.
    pub fn verify_document(
        &self,
        hash: &str,
        verifier_address: Option<String>,
    ) -> VerificationResult {
        let mut inner = self.inner.write().unwrap();
        let key = hash.to_ascii_lowercase();

        let Some(&id) = inner.by_hash.get(&key) else {
            return VerificationResult::not_found();
        };
        let Some(document) = inner.documents.get(&id).cloned() else {
            return VerificationResult::not_found();
        };

        inner.verifications.push(Verification {
            id: Uuid::new_v4(),
            document_hash: key.clone(),
            verified_at: Utc::now(),
            verifier_address: Some(
                verifier_address.unwrap_or_else(synthetic::verifier_address),
            ),
        });

        let verifications: Vec<Verification> = inner
            .verifications
            .iter()
            .filter(|v| v.document_hash == key)
            .cloned()
            .collect();

        VerificationResult {
            exists: true,
            is_valid: !document.is_revoked,
            issuer: Some(document.issuer.clone()),
            timestamp: Some(document.created_at),
            block_number: Some(synthetic::block_number()),
            transaction_hash: Some(synthetic::transaction_hash()),
            verifications: Some(verifications),
            document: Some(document),
        }
    }

    /// Registry statistics, computed on demand from the document set.
    pub fn stats(&self) -> DocumentStats {
        let inner = self.inner.read().unwrap();
        let now = Utc::now();

        let mut stats = DocumentStats::default();
        for document in inner.documents.values() {
            stats.total_documents += 1;
            if document.is_revoked {
                stats.revoked += 1;
            } else {
                stats.verified += 1;
            }
            if document.created_at.month() == now.month()
                && document.created_at.year() == now.year()
            {
                stats.this_month += 1;
            }
        }
        stats
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docproof_core::hash::sha256_hex_str;

    fn new_document(title: &str, hash: &str) -> NewDocument {
        NewDocument {
            title: title.to_string(),
            filename: format!("{}.pdf", title.to_lowercase().replace(' ', "_")),
            document_hash: hash.to_string(),
            ipfs_hash: None,
            description: None,
            is_public: false,
            is_revoked: false,
            issuer: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
        }
    }

    #[test]
    fn test_create_and_lookup() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("diploma");

        let created = store
            .create_document(new_document("Diploma", &hash))
            .unwrap();
        assert_eq!(created.document_hash, hash);
        assert!(!created.is_revoked);

        let by_id = store.document(created.id).unwrap();
        assert_eq!(by_id, created);

        let by_hash = store.document_by_hash(&hash).unwrap();
        assert_eq!(by_hash, created);

        assert!(store.document(Uuid::new_v4()).is_none());
        assert!(store.document_by_hash(&"f".repeat(64)).is_none());
    }

    #[test]
    fn test_duplicate_hash_rejected_and_store_unchanged() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("original");

        store
            .create_document(new_document("Original", &hash))
            .unwrap();

        let err = store
            .create_document(new_document("Copy", &hash))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateHash { .. }));

        let all = store.all_documents();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Original");
    }

    #[test]
    fn test_duplicate_check_ignores_case() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("cased");

        store.create_document(new_document("First", &hash)).unwrap();

        let err = store
            .create_document(new_document("Second", &hash.to_ascii_uppercase()))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateHash { .. }));
    }

    #[test]
    fn test_hash_stored_lowercase() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("mixed").to_ascii_uppercase();

        let created = store.create_document(new_document("Mixed", &hash)).unwrap();
        assert_eq!(created.document_hash, hash.to_ascii_lowercase());
        assert!(store.document_by_hash(&hash).is_some());
    }

    #[test]
    fn test_all_documents_newest_first() {
        let store = DocumentStore::new();
        for i in 0..5 {
            store
                .create_document(new_document(&format!("Doc {}", i), &sha256_hex_str(&i.to_string())))
                .unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let all = store.all_documents();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
        assert_eq!(all[0].title, "Doc 4");
    }

    #[test]
    fn test_update_document_merges_fields() {
        let store = DocumentStore::new();
        let created = store
            .create_document(new_document("Before", &sha256_hex_str("update")))
            .unwrap();

        let updated = store
            .update_document(
                created.id,
                DocumentUpdate {
                    title: Some("After".to_string()),
                    description: Some("now described".to_string()),
                    is_public: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "After");
        assert_eq!(updated.description.as_deref(), Some("now described"));
        assert!(updated.is_public);
        // untouched fields survive
        assert_eq!(updated.filename, created.filename);
        assert_eq!(updated.created_at, created.created_at);

        assert!(store
            .update_document(Uuid::new_v4(), DocumentUpdate::default())
            .is_none());
    }

    #[test]
    fn test_update_cannot_unrevoke() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("monotonic");
        let created = store
            .create_document(new_document("Monotonic", &hash))
            .unwrap();

        assert!(store.revoke_document(&hash));

        let updated = store
            .update_document(
                created.id,
                DocumentUpdate {
                    is_revoked: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.is_revoked);
    }

    #[test]
    fn test_revoke_unknown_hash_is_noop() {
        let store = DocumentStore::new();
        assert!(!store.revoke_document(&"a".repeat(64)));
        assert!(store.all_documents().is_empty());
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("revocable");
        store
            .create_document(new_document("Revocable", &hash))
            .unwrap();

        assert!(store.revoke_document(&hash));
        assert!(store.document_by_hash(&hash).unwrap().is_revoked);

        // second revoke still reports success, state unchanged
        assert!(store.revoke_document(&hash));
        assert!(store.document_by_hash(&hash).unwrap().is_revoked);
    }

    #[test]
    fn test_verify_unknown_hash_records_nothing() {
        let store = DocumentStore::new();
        let hash = "a".repeat(64);

        let result = store.verify_document(&hash, None);
        assert!(!result.exists);
        assert!(!result.is_valid);
        assert!(result.document.is_none());
        assert!(result.verifications.is_none());
        assert!(store.verifications_by_hash(&hash).is_empty());
    }

    #[test]
    fn test_verify_records_one_event() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("verified once");
        store
            .create_document(new_document("Verified", &hash))
            .unwrap();

        let result = store.verify_document(&hash, None);
        assert!(result.exists);
        assert!(result.is_valid);
        // the event recorded by this check is part of the returned history
        assert_eq!(result.verifications.as_ref().unwrap().len(), 1);
        assert_eq!(result.verifications.unwrap()[0].document_hash, hash);
        assert_eq!(store.verifications_by_hash(&hash).len(), 1);

        let again = store.verify_document(&hash, None);
        assert_eq!(again.verifications.unwrap().len(), 2);
        assert_eq!(store.verifications_by_hash(&hash).len(), 2);
    }

    #[test]
    fn test_verify_uses_supplied_verifier_address() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("attributed");
        store
            .create_document(new_document("Attributed", &hash))
            .unwrap();

        let result = store.verify_document(&hash, Some("0xfeedbeef".to_string()));
        let events = result.verifications.unwrap();
        assert_eq!(events[0].verifier_address.as_deref(), Some("0xfeedbeef"));

        // absent a caller identity, a synthetic address is filled in
        let result = store.verify_document(&hash, None);
        let events = result.verifications.unwrap();
        let address = events[1].verifier_address.as_deref().unwrap();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
    }

    #[test]
    fn test_verify_revoked_document_is_invalid() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("revoked doc");
        store
            .create_document(new_document("Revoked", &hash))
            .unwrap();
        store.revoke_document(&hash);

        let result = store.verify_document(&hash, None);
        assert!(result.exists);
        assert!(!result.is_valid);
        assert!(result.document.unwrap().is_revoked);
    }

    #[test]
    fn test_verify_result_carries_document_metadata() {
        let store = DocumentStore::new();
        let hash = sha256_hex_str("metadata");
        let created = store
            .create_document(new_document("Metadata", &hash))
            .unwrap();

        let result = store.verify_document(&hash, None);
        assert_eq!(result.issuer.as_deref(), Some(created.issuer.as_str()));
        assert_eq!(result.timestamp, Some(created.created_at));
        assert!(result.block_number.is_some());
        assert!(result.transaction_hash.is_some());
    }

    #[test]
    fn test_create_verification_soft_reference() {
        let store = DocumentStore::new();
        // a verification may reference a hash that was never registered
        let orphan = store.create_verification(NewVerification {
            document_hash: "d".repeat(64),
            verifier_address: None,
        });
        assert_eq!(store.verifications_by_hash(&"d".repeat(64)), vec![orphan]);
    }

    #[test]
    fn test_stats() {
        let store = DocumentStore::new();
        assert_eq!(store.stats(), DocumentStats::default());

        let revoked_hash = sha256_hex_str("stats revoked");
        store
            .create_document(new_document("Kept", &sha256_hex_str("stats kept")))
            .unwrap();
        store
            .create_document(new_document("Dropped", &revoked_hash))
            .unwrap();
        store.revoke_document(&revoked_hash);

        let stats = store.stats();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.revoked, 1);
        // both created just now, within the current calendar month
        assert_eq!(stats.this_month, 2);
    }
}
