//! # Identity Decoder
//!
//! Node descriptor text → validated [`OracleIdentity`].
//!
//! Keys are prefix-stripped, hex-decoded and fixed to their role's size. Under
//! [`KeyLengthPolicy::Strict`] any size mismatch fails; under
//! [`KeyLengthPolicy::LegacyZeroPad`] keys are padded or truncated the way
//! older deployment tooling did it.

use crate::config::KeyLengthPolicy;
use crate::domain::{ConfigGenError, KeyField, NodeDescriptor, OracleIdentity};
use shared_crypto::{
    decode_hex, fixed_bytes, strip_key_prefix, zero_padded_bytes, Ed25519PublicKey, EvmAddress,
    X25519PublicKey, ADDRESS_LENGTH, ED25519_PUBLIC_KEY_SIZE, X25519_POINT_SIZE,
};
use tracing::{debug, warn};

/// Decode every node, in order. The first bad node aborts the batch.
pub fn decode_identities(
    nodes: &[NodeDescriptor],
    policy: KeyLengthPolicy,
) -> Result<Vec<OracleIdentity>, ConfigGenError> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| decode_identity(index, node, policy))
        .collect()
}

/// Decode one node descriptor.
pub fn decode_identity(
    index: usize,
    node: &NodeDescriptor,
    policy: KeyLengthPolicy,
) -> Result<OracleIdentity, ConfigGenError> {
    let offchain = decode_key::<ED25519_PUBLIC_KEY_SIZE>(
        index,
        KeyField::Offchain,
        &node.offchain_key,
        policy,
    )?;
    let config =
        decode_key::<X25519_POINT_SIZE>(index, KeyField::Config, &node.config_key, policy)?;
    let onchain = decode_onchain_address(index, &node.onchain_key, policy)?;

    debug!(node = index, peer_id = %node.peer_id, signer = %onchain, "decoded oracle identity");

    Ok(OracleIdentity {
        onchain_public_key: onchain,
        offchain_public_key: Ed25519PublicKey::from_bytes(offchain),
        config_encryption_public_key: X25519PublicKey::from_bytes(config),
        peer_id: node.peer_id.clone(),
        transmit_account: node.transmitter.clone(),
    })
}

fn decode_key<const N: usize>(
    index: usize,
    field: KeyField,
    text: &str,
    policy: KeyLengthPolicy,
) -> Result<[u8; N], ConfigGenError> {
    let bytes = decode_hex(strip_key_prefix(text))
        .map_err(|e| ConfigGenError::from_crypto(index, field, e))?;

    match policy {
        KeyLengthPolicy::Strict => {
            fixed_bytes::<N>(&bytes).map_err(|e| ConfigGenError::from_crypto(index, field, e))
        }
        KeyLengthPolicy::LegacyZeroPad => {
            if bytes.len() != N {
                warn!(
                    node = index,
                    %field,
                    expected = N,
                    actual = bytes.len(),
                    "key resized to fit"
                );
            }
            Ok(zero_padded_bytes::<N>(&bytes))
        }
    }
}

/// Decode the onchain key and normalize it to a 20-byte address.
fn decode_onchain_address(
    index: usize,
    text: &str,
    policy: KeyLengthPolicy,
) -> Result<EvmAddress, ConfigGenError> {
    let stripped = strip_key_prefix(text);
    let to_error = |e| ConfigGenError::from_crypto(index, KeyField::Onchain, e);

    match policy {
        KeyLengthPolicy::Strict => {
            let bytes = decode_hex(stripped).map_err(to_error)?;
            EvmAddress::from_slice(&bytes).map_err(to_error)
        }
        KeyLengthPolicy::LegacyZeroPad => {
            // Address normalization tolerates odd-length hex too
            let address = EvmAddress::from_hex_normalized(stripped).map_err(to_error)?;
            if stripped.len() != 2 * ADDRESS_LENGTH {
                warn!(
                    node = index,
                    field = %KeyField::Onchain,
                    hex_digits = stripped.len(),
                    "onchain key normalized to 20 bytes"
                );
            }
            Ok(address)
        }
    }
}
