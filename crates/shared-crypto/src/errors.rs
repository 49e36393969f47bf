//! Crypto error types.

use thiserror::Error;

/// Key material and encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Text is not valid hexadecimal
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_length_message() {
        let err = CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.to_string(), "Invalid key length: expected 32, got 31");
    }

    #[test]
    fn test_invalid_hex_message() {
        let err = CryptoError::InvalidHex("Odd number of digits".to_string());
        assert!(err.to_string().contains("Odd number of digits"));
    }
}
