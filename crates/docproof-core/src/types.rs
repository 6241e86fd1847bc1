//! Wire schema for the DocProof registry.
//!
//! These types are shared between the server and the CLI so both sides of
//! the API agree on a single JSON shape. All fields serialize in camelCase,
//! and optional fields are omitted from JSON when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered document record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique identifier of this record, assigned at creation.
    pub id: Uuid,

    /// Human-readable title supplied at registration.
    pub title: String,

    /// Original file name at upload time.
    pub filename: String,

    /// SHA-256 content digest, 64 lowercase hex characters.
    /// Unique across all registered documents.
    pub document_hash: String,

    /// Optional opaque content reference (not validated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,

    /// Optional free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the document is publicly listed.
    pub is_public: bool,

    /// One-way revocation flag; never transitions back to false.
    pub is_revoked: bool,

    /// Identifier of the registering party.
    pub issuer: String,

    /// When this record was created. Immutable.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new document (a [`Document`] minus the
/// server-assigned `id` and `created_at`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub title: String,
    pub filename: String,
    pub document_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_revoked: bool,
    pub issuer: String,
}

/// An immutable verification event: one hash check that found a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Unique identifier of this event.
    pub id: Uuid,

    /// The hash that was checked. Soft reference: it is not required to
    /// match a registered document.
    pub document_hash: String,

    /// When the check happened.
    pub verified_at: DateTime<Utc>,

    /// Opaque identifier of the checking party, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier_address: Option<String>,
}

/// Data required to record a new verification event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewVerification {
    pub document_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifier_address: Option<String>,
}

/// Outcome of checking a hash against the registry.
///
/// For an unknown hash only `exists` and `is_valid` are populated. For a
/// known hash the result carries the document, its full verification
/// history including the event recorded by this check, and the synthetic
/// ledger fields (placeholder values, not backed by any chain).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub exists: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifications: Option<Vec<Verification>>,

    /// True iff the document exists and has not been revoked.
    pub is_valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Registration time of the matched document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Synthetic block-number label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,

    /// Synthetic transaction hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl VerificationResult {
    /// Result for a hash with no registered document.
    pub fn not_found() -> Self {
        Self {
            exists: false,
            document: None,
            verifications: None,
            is_valid: false,
            issuer: None,
            timestamp: None,
            block_number: None,
            transaction_hash: None,
        }
    }
}

/// Response body for a successful document registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDocumentResponse {
    pub success: bool,
    pub document: Document,
}

/// Response body for a successful revocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevokeResponse {
    pub success: bool,
    pub message: String,
}

/// Registry statistics, computed on demand from the document set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    /// Total number of registered documents.
    pub total_documents: usize,
    /// Documents that have not been revoked.
    pub verified: usize,
    /// Documents that have been revoked.
    pub revoked: usize,
    /// Documents registered in the current calendar month.
    pub this_month: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> Document {
        Document {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            title: "University Diploma".to_string(),
            filename: "diploma_2023.pdf".to_string(),
            document_hash: "a".repeat(64),
            ipfs_hash: Some("QmX1B2C3D4E5F6789".to_string()),
            description: Some("Computer Science Degree".to_string()),
            is_public: true,
            is_revoked: false,
            issuer: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            created_at: "2023-12-15T14:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let json = serde_json::to_string(&sample_document()).unwrap();
        assert!(json.contains("\"documentHash\":"));
        assert!(json.contains("\"ipfsHash\":"));
        assert!(json.contains("\"isPublic\":true"));
        assert!(json.contains("\"isRevoked\":false"));
        assert!(json.contains("\"createdAt\":"));
        assert!(!json.contains("document_hash"));
    }

    #[test]
    fn test_document_round_trip() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_new_document_defaults() {
        // isPublic/isRevoked and the optional fields may be omitted entirely
        let json = r#"{
            "title": "Contract Agreement",
            "filename": "contract.pdf",
            "documentHash": "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
            "issuer": "0x3456789012cdef3456789012cdef3456789012cd"
        }"#;

        let new: NewDocument = serde_json::from_str(json).unwrap();
        assert_eq!(new.title, "Contract Agreement");
        assert!(!new.is_public);
        assert!(!new.is_revoked);
        assert!(new.ipfs_hash.is_none());
        assert!(new.description.is_none());
    }

    #[test]
    fn test_verification_serializes_camel_case() {
        let verification = Verification {
            id: Uuid::new_v4(),
            document_hash: "b".repeat(64),
            verified_at: "2024-01-15T10:30:00Z".parse().unwrap(),
            verifier_address: Some("0xabc".to_string()),
        };

        let json = serde_json::to_string(&verification).unwrap();
        assert!(json.contains("\"documentHash\":"));
        assert!(json.contains("\"verifiedAt\":"));
        assert!(json.contains("\"verifierAddress\":"));
    }

    #[test]
    fn test_not_found_result_omits_optional_fields() {
        let result = VerificationResult::not_found();
        assert!(!result.exists);
        assert!(!result.is_valid);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"exists":false,"isValid":false}"#);
    }

    #[test]
    fn test_verification_result_round_trip() {
        let result = VerificationResult {
            exists: true,
            document: Some(sample_document()),
            verifications: Some(vec![]),
            is_valid: true,
            issuer: Some("0x1234".to_string()),
            timestamp: Some("2023-12-15T14:30:00Z".parse().unwrap()),
            block_number: Some("#18,547,912".to_string()),
            transaction_hash: Some(format!("0x{}", "c".repeat(64))),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"blockNumber\":"));
        assert!(json.contains("\"transactionHash\":"));

        let back: VerificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_stats_serializes_camel_case() {
        let stats = DocumentStats {
            total_documents: 3,
            verified: 2,
            revoked: 1,
            this_month: 3,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"totalDocuments":3,"verified":2,"revoked":1,"thisMonth":3}"#
        );
    }
}
