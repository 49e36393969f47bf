//! # Shared Crypto - Oracle Key Material
//!
//! ## Components
//!
//! | Module | Contents | Use Case |
//! |--------|----------|----------|
//! | `keys` | Ed25519 / X25519 public keys, hex + prefix handling | Oracle identities |
//! | `address` | 20-byte EVM address, EIP-55 checksum | Signers / onchain keys |
//! | `hashing` | Keccak-256, SHA-256 | Checksums, config commitments |
//!
//! Nothing here holds secret material: every type is a public key or an
//! address taken from a node's exported key bundle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod errors;
pub mod hashing;
pub mod keys;

// Re-exports
pub use address::{EvmAddress, ADDRESS_LENGTH};
pub use errors::CryptoError;
pub use hashing::{keccak256, sha256, sha256_many, Hash};
pub use keys::{
    decode_hex, fixed_bytes, strip_key_prefix, zero_padded_bytes, Ed25519PublicKey,
    X25519PublicKey, ED25519_PUBLIC_KEY_SIZE, KEY_PREFIXES, X25519_POINT_SIZE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
