//! DocProof Server - API for the DocProof registry
//!
//! This crate provides the REST API server for DocProof's document
//! registration and verification system: hash-keyed document records,
//! an append-only verification log, and one-way revocation.

pub mod error;
pub mod routes;
pub mod seed;
pub mod store;
pub mod synthetic;

pub use error::AppError;
pub use routes::create_router;
pub use store::DocumentStore;
