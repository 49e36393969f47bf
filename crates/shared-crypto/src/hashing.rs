//! # Hashing
//!
//! Keccak-256 for EVM address checksums, SHA-256 for config commitments.

use sha2::Sha256;
use sha3::{Digest, Keccak256};

/// 256-bit hash output.
pub type Hash = [u8; 32];

/// Keccak-256 (the pre-standard SHA-3 variant used by the EVM).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 over several inputs, each prefixed with its length.
///
/// The length prefix keeps `["ab", "c"]` and `["a", "bc"]` distinct.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update((input.len() as u64).to_be_bytes());
        hasher.update(input);
    }
    hasher.finalize().into()
}
