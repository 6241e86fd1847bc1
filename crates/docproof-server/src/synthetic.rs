//! Random placeholder values for the mock ledger fields.
//!
//! DocProof is not connected to any chain. These generators exist so
//! records and verification results carry the ledger-shaped fields the
//! API exposes (verifier address, block number, transaction hash) with
//! explicitly synthetic content.

use rand::Rng;

/// Account address length in bytes (20 bytes = 40 hex chars).
const ADDRESS_BYTES: usize = 20;

/// Transaction hash length in bytes (32 bytes = 64 hex chars).
const TX_HASH_BYTES: usize = 32;

/// Generates a placeholder account address: "0x" followed by 40 hex chars.
pub fn verifier_address() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; ADDRESS_BYTES] = rng.gen();
    format!("0x{}", hex::encode(bytes))
}

/// Generates a placeholder transaction hash: "0x" followed by 64 hex chars.
pub fn transaction_hash() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; TX_HASH_BYTES] = rng.gen();
    format!("0x{}", hex::encode(bytes))
}

/// Generates a placeholder block-number label.
pub fn block_number() -> String {
    let mut rng = rand::thread_rng();
    format!("#18,547,{}", rng.gen_range(800..1800))
}
