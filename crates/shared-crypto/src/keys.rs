//! # Oracle Key Material
//!
//! Fixed-size public keys carried by every oracle identity:
//!
//! | Type | Scheme | Size |
//! |------|--------|------|
//! | `Ed25519PublicKey` | Offchain report signing | 32 bytes |
//! | `X25519PublicKey` | Config shared-secret encryption | 32 bytes |
//!
//! Keys are validated at construction and never resized afterwards.

use crate::CryptoError;

/// Ed25519 public key size.
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Curve25519 point size.
pub const X25519_POINT_SIZE: usize = 32;

/// Textual key prefixes emitted by node key exports, stripped in this order.
pub const KEY_PREFIXES: [&str; 4] = ["ocr2off_evm_", "ocr2cfg_evm_", "ocr2on_evm_", "0x"];

/// Remove recognized key prefixes.
///
/// Each prefix is removed at most once and only when the remaining text starts
/// with it, so `ocr2on_evm_0xab` becomes `ab`.
pub fn strip_key_prefix(key: &str) -> &str {
    KEY_PREFIXES
        .iter()
        .fold(key, |rest, prefix| rest.strip_prefix(prefix).unwrap_or(rest))
}

/// Decode hex text into bytes.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(text).map_err(|e| CryptoError::InvalidHex(e.to_string()))
}

/// Copy `bytes` into an array of exactly `N` bytes.
pub fn fixed_bytes<const N: usize>(bytes: &[u8]) -> Result<[u8; N], CryptoError> {
    <[u8; N]>::try_from(bytes).map_err(|_| CryptoError::InvalidKeyLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// Copy `bytes` into a zeroed `N`-byte array, truncating or right-padding.
pub fn zero_padded_bytes<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let len = bytes.len().min(N);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

/// Ed25519 public key used to sign offchain protocol messages (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_SIZE]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        fixed_bytes(bytes).map(Self)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

/// X25519 public key used to encrypt the config shared secret (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct X25519PublicKey([u8; X25519_POINT_SIZE]);

impl X25519PublicKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; X25519_POINT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        fixed_bytes(bytes).map(Self)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; X25519_POINT_SIZE] {
        &self.0
    }
}
