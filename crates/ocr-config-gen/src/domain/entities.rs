//! # Domain Entities
//!
//! Request and response shapes plus the decoded oracle identity.

use super::errors::ConfigGenError;
use super::value_objects::{ChainSelector, PluginType};
use serde::{Deserialize, Serialize};
use shared_crypto::{Ed25519PublicKey, EvmAddress, X25519PublicKey};

/// One participant as exported from its node's key bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Onchain signing address, e.g. `ocr2on_evm_0x...`.
    #[serde(rename = "onchainKey")]
    pub onchain_key: String,
    /// Offchain Ed25519 public key, e.g. `ocr2off_evm_...`.
    #[serde(rename = "offchainKey")]
    pub offchain_key: String,
    /// Config encryption X25519 public key, e.g. `ocr2cfg_evm_...`.
    #[serde(rename = "configKey")]
    pub config_key: String,
    /// libp2p peer id.
    #[serde(rename = "peerID")]
    pub peer_id: String,
    /// Account that transmits reports onchain.
    pub transmitter: String,
}

/// Full generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRequest {
    /// Committee in canonical order.
    pub nodes: Vec<NodeDescriptor>,
    /// Plugin tag, validated against [`PluginType`] after parsing.
    pub plugin_type: String,
    /// Chain this committee reports on (CCIP only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_selector: Option<String>,
    /// Chain hosting the price feeds (CCIP commit only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_chain_selector: Option<String>,
}

impl UnifiedRequest {
    /// Parse a request from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigGenError> {
        serde_json::from_str(text).map_err(|e| ConfigGenError::MalformedRequest(e.to_string()))
    }

    /// Resolve the plugin tag.
    pub fn plugin(&self) -> Result<PluginType, ConfigGenError> {
        self.plugin_type.parse()
    }

    /// Selector of the chain hosting price feeds.
    ///
    /// `feedChainSelector` wins; `chainSelector` is the fallback; absent or
    /// empty fields mean no selector.
    pub fn price_feed_selector(&self) -> Result<Option<ChainSelector>, ConfigGenError> {
        let candidates = [
            ("feedChainSelector", &self.feed_chain_selector),
            ("chainSelector", &self.chain_selector),
        ];
        for (field, value) in candidates {
            if let Some(text) = value.as_deref().filter(|t| !t.trim().is_empty()) {
                return ChainSelector::parse(field, text).map(Some);
            }
        }
        Ok(None)
    }
}

/// Validated identity of one oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleIdentity {
    /// Onchain signing address.
    pub onchain_public_key: EvmAddress,
    /// Offchain signing key.
    pub offchain_public_key: Ed25519PublicKey,
    /// Key the shared secret is encrypted to.
    pub config_encryption_public_key: X25519PublicKey,
    /// libp2p peer id.
    pub peer_id: String,
    /// Transmitter account.
    pub transmit_account: String,
}

/// Output of committee synthesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesisResult {
    /// Raw onchain signer keys, in committee order.
    pub signers: Vec<Vec<u8>>,
    /// Transmitter accounts, in committee order.
    pub transmitters: Vec<String>,
    /// Fault tolerance threshold.
    pub f: u8,
    /// Offchain config format version.
    pub offchain_config_version: u64,
    /// Opaque offchain config blob.
    pub offchain_config: Vec<u8>,
}

/// Contract-ready configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Checksummed signer addresses.
    pub signers: Vec<String>,
    /// Transmitter accounts.
    pub transmitters: Vec<String>,
    /// Fault tolerance threshold.
    pub f: u8,
    /// Offchain config format version.
    pub offchain_config_version: u64,
    /// Hex-encoded offchain config blob (no prefix).
    pub offchain_config: String,
    /// `0x`-prefixed digest, CCIP plugins only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_digest: Option<String>,
}

impl OutputConfig {
    /// Serialize as compact or indented JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigGenError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| ConfigGenError::SerializationFailure(e.to_string()))
    }
}
