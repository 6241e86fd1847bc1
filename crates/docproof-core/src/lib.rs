// DocProof Core - Shared schema and hashing for the DocProof registry

pub mod hash;
pub mod types;

pub use hash::{is_well_formed_hash, sha256_hex, sha256_hex_str, truncate_hash};
pub use types::{
    Document, DocumentStats, NewDocument, NewVerification, RegisterDocumentResponse,
    RevokeResponse, Verification, VerificationResult,
};
