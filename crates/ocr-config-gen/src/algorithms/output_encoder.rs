//! # Output Encoder
//!
//! Synthesis result → contract-ready [`OutputConfig`].

use crate::domain::{OutputConfig, PluginType, SynthesisResult};
use shared_crypto::EvmAddress;

/// Digest length in bytes.
pub const CONFIG_DIGEST_LENGTH: usize = 32;

/// Encode a synthesis result for `plugin`.
///
/// Signers become checksummed addresses, transmitters pass through, the blob is
/// hex-encoded, and CCIP plugins get a config digest.
pub fn encode_output(result: &SynthesisResult, plugin: PluginType) -> OutputConfig {
    let signers = result
        .signers
        .iter()
        .map(|signer| EvmAddress::from_slice_normalized(signer).to_checksum_string())
        .collect();

    OutputConfig {
        signers,
        transmitters: result.transmitters.clone(),
        f: result.f,
        offchain_config_version: result.offchain_config_version,
        offchain_config: hex::encode(&result.offchain_config),
        config_digest: plugin
            .requires_digest()
            .then(|| config_digest(&result.offchain_config)),
    }
}

/// Digest of an offchain config blob.
///
/// The first 32 bytes of the blob, or, for a blob shorter than that, its
/// length as a 32-byte big-endian number. The short form is a compatibility
/// fallback and identifies nothing about the content.
pub fn config_digest(blob: &[u8]) -> String {
    match blob.get(..CONFIG_DIGEST_LENGTH) {
        Some(head) => format!("0x{}", hex::encode(head)),
        None => format!("0x{:064x}", blob.len()),
    }
}
