//! # Domain Errors
//!
//! Every failure is fatal for the whole request: there is no partial output and
//! nothing is retried, since the same input always fails the same way.

use super::value_objects::KeyField;
use shared_crypto::CryptoError;
use thiserror::Error;

/// Configuration generation errors.
#[derive(Debug, Error)]
pub enum ConfigGenError {
    /// The request could not be parsed or has an invalid field.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A key field is not valid hexadecimal.
    #[error("Invalid encoding for node {node} {field}: {reason}")]
    InvalidEncoding {
        /// Index of the node in the request
        node: usize,
        /// Offending key field
        field: KeyField,
        /// Decoder message
        reason: String,
    },

    /// A decoded key has the wrong length for its role.
    #[error("Invalid key length for node {node} {field}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Index of the node in the request
        node: usize,
        /// Offending key field
        field: KeyField,
        /// Required length in bytes
        expected: usize,
        /// Decoded length in bytes
        actual: usize,
    },

    /// Plugin type tag is not one of the supported plugins.
    #[error("Unsupported plugin type: {0}")]
    UnsupportedPluginType(String),

    /// Plugin configuration record could not be serialized.
    #[error("Serialization failure: {0}")]
    SerializationFailure(String),

    /// Committee synthesis refused the inputs.
    #[error("Synthesis rejected: {0}")]
    SynthesisRejected(String),
}

impl ConfigGenError {
    /// Scope a crypto error to the node and field it came from.
    pub fn from_crypto(node: usize, field: KeyField, err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidHex(reason) => Self::InvalidEncoding {
                node,
                field,
                reason,
            },
            CryptoError::InvalidKeyLength { expected, actual } => Self::InvalidKeyLength {
                node,
                field,
                expected,
                actual,
            },
        }
    }
}
