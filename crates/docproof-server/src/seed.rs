//! Demo seed data.
//!
//! Populates a store with the sample records the registry ships with for
//! demonstrations. Enabled in the server binary via the `DOCPROOF_DEMO`
//! environment variable; never used in normal operation.

use docproof_core::hash::sha256_hex_str;
use docproof_core::types::NewDocument;

use crate::store::DocumentStore;

/// Seeds three sample documents: two valid, one revoked.
pub fn seed_sample_documents(store: &DocumentStore) {
    let samples = [
        NewDocument {
            title: "University Diploma".to_string(),
            filename: "diploma_2023.pdf".to_string(),
            document_hash: sha256_hex_str("sample: diploma_2023.pdf"),
            ipfs_hash: Some("QmX1B2C3D4E5F6789".to_string()),
            description: Some("Computer Science Degree from State University".to_string()),
            is_public: true,
            is_revoked: false,
            issuer: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
        },
        NewDocument {
            title: "Professional Certificate".to_string(),
            filename: "certificate_web3.pdf".to_string(),
            document_hash: sha256_hex_str("sample: certificate_web3.pdf"),
            ipfs_hash: Some("QmY2C3D4E5F6789A".to_string()),
            description: Some("Blockchain Development Certification".to_string()),
            is_public: true,
            is_revoked: false,
            issuer: "0x2345678901bcdef2345678901bcdef2345678901".to_string(),
        },
        NewDocument {
            title: "Contract Agreement".to_string(),
            filename: "contract_old.pdf".to_string(),
            document_hash: sha256_hex_str("sample: contract_old.pdf"),
            ipfs_hash: Some("QmZ3D4E5F6789AB".to_string()),
            description: Some("Service Agreement - Superseded".to_string()),
            is_public: false,
            is_revoked: true,
            issuer: "0x3456789012cdef3456789012cdef3456789012cd".to_string(),
        },
    ];

    for sample in samples {
        // Re-seeding an already-seeded store is a no-op per document.
        if let Err(e) = store.create_document(sample) {
            tracing::debug!("Skipping seed document: {}", e);
        }
    }
}
