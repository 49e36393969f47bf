//! # EVM Addresses
//!
//! 20-byte account addresses with EIP-55 mixed-case checksum encoding.

use crate::hashing::keccak256;
use crate::CryptoError;
use std::fmt;

/// EVM address length.
pub const ADDRESS_LENGTH: usize = 20;

/// 20-byte EVM account address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvmAddress([u8; ADDRESS_LENGTH]);

impl EvmAddress {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create from a slice that must be exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        crate::keys::fixed_bytes(bytes).map(Self)
    }

    /// Normalize arbitrary-length bytes into an address.
    ///
    /// Longer input keeps its last 20 bytes, shorter input is left-padded
    /// with zeros.
    pub fn from_slice_normalized(bytes: &[u8]) -> Self {
        let mut out = [0u8; ADDRESS_LENGTH];
        if bytes.len() > ADDRESS_LENGTH {
            out.copy_from_slice(&bytes[bytes.len() - ADDRESS_LENGTH..]);
        } else {
            out[ADDRESS_LENGTH - bytes.len()..].copy_from_slice(bytes);
        }
        Self(out)
    }

    /// Parse hex text (optional `0x`) with normalizing semantics.
    ///
    /// Odd-length text gets a leading `0` nibble before decoding. Invalid hex
    /// characters are still an error.
    pub fn from_hex_normalized(text: &str) -> Result<Self, CryptoError> {
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = if text.len() % 2 == 1 {
            crate::keys::decode_hex(&format!("0{text}"))?
        } else {
            crate::keys::decode_hex(text)?
        };
        Ok(Self::from_slice_normalized(&bytes))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// EIP-55 checksum encoding, `0x`-prefixed.
    ///
    /// A hex letter is upper-cased when the matching nibble of
    /// `keccak256(lowercase_hex)` is 8 or greater.
    pub fn to_checksum_string(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_string())
    }
}

impl From<[u8; ADDRESS_LENGTH]> for EvmAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}
