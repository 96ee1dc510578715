//! Admin API key verification.
//!
//! The server is configured with the SHA-256 hex digest of the admin key,
//! never the key itself. Requests present the plaintext key as a bearer
//! token; its digest is compared in constant time.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of an admin key.
pub fn hash_admin_key(key: &str) -> String {
    let hash = Sha256::digest(key.as_bytes());
    format!("{hash:x}")
}

/// Check a presented key against the configured digest.
///
/// The expected digest is compared case-insensitively so operators may paste
/// upper-case hex.
pub fn verify_admin_key(presented: &str, expected_sha256_hex: &str) -> bool {
    let actual = hash_admin_key(presented);
    let expected = expected_sha256_hex.trim().to_ascii_lowercase();
    constant_time_eq(actual.as_bytes(), expected.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
