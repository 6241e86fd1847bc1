// SHA-256 hashing utilities for DocProof

use sha2::{Digest, Sha256};

/// Computes the SHA-256 hash of the input bytes and returns it as a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Computes the SHA-256 hash of a text string, over its UTF-8 bytes.
pub fn sha256_hex_str(text: &str) -> String {
    sha256_hex(text.as_bytes())
}

/// Returns true iff `s` is exactly 64 hexadecimal characters, case-insensitive.
pub fn is_well_formed_hash(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Truncates a hash for display: keeps the first `len` characters and
/// appends "..." when anything was cut.
pub fn truncate_hash(hash: &str, len: usize) -> String {
    if hash.len() <= len {
        return hash.to_string();
    }
    format!("{}...", &hash[..len])
}
