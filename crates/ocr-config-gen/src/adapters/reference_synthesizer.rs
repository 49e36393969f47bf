//! Reference Synthesizer Adapter
//!
//! Implements `CommitteeSynthesizer` without any secret material: the public
//! half of the offchain config is encoded with bincode and prefixed with its
//! SHA-256, so the blob is a pure function of the request.

use crate::domain::{OracleIdentity, SynthesisResult, TimingParameters};
use crate::ports::outbound::{CommitteeSynthesizer, SynthesisError, SynthesisRequest};
use serde::{Deserialize, Serialize};
use shared_crypto::{sha256, sha256_many, Hash};
use std::collections::HashMap;
use std::hash::Hash as StdHash;
use std::time::Duration;
use tracing::debug;

/// Largest committee the protocol supports.
pub const MAX_ORACLES: usize = 31;

/// Offchain config format version emitted by this synthesizer.
pub const OFFCHAIN_CONFIG_VERSION: u64 = 30;

const CHECKSUM_LENGTH: usize = 32;

/// Public offchain configuration carried in the blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffchainConfigBlob {
    /// Time a leader has to make progress, in nanoseconds.
    pub delta_progress_nanos: u64,
    /// Resend interval.
    pub delta_resend_nanos: u64,
    /// Delay before the first round.
    pub delta_initial_nanos: u64,
    /// Minimum round length.
    pub delta_round_nanos: u64,
    /// Observation grace period.
    pub delta_grace_nanos: u64,
    /// Certified commit request resend interval.
    pub delta_certified_commit_request_nanos: u64,
    /// Transmission stage delay.
    pub delta_stage_nanos: u64,
    /// Maximum rounds per epoch.
    pub r_max: u64,
    /// Inclusion weight per oracle.
    pub weights: Vec<u64>,
    /// Peer ids in committee order.
    pub peer_ids: Vec<String>,
    /// Offchain public keys in committee order.
    pub offchain_public_keys: Vec<[u8; 32]>,
    /// Config encryption keys in committee order.
    pub config_encryption_public_keys: Vec<[u8; 32]>,
    /// Serialized plugin config record.
    pub reporting_plugin_config: Vec<u8>,
    /// Initialization ceiling, unbounded when absent.
    pub max_duration_initialization_nanos: Option<u64>,
    /// Query phase ceiling.
    pub max_duration_query_nanos: u64,
    /// Observation phase ceiling.
    pub max_duration_observation_nanos: u64,
    /// Accept-report ceiling.
    pub max_duration_should_accept_attested_report_nanos: u64,
    /// Transmit-report ceiling.
    pub max_duration_should_transmit_accepted_report_nanos: u64,
    /// Fault tolerance.
    pub f: u8,
    /// Onchain config bytes.
    pub onchain_config: Vec<u8>,
    /// SHA-256 commitment over every oracle identity.
    pub identity_commitment: Hash,
}

impl OffchainConfigBlob {
    /// Checksummed encoding: `sha256(body) || body`.
    pub fn encode(&self) -> Result<Vec<u8>, SynthesisError> {
        let body = bincode::serialize(self).map_err(|e| SynthesisError::Encoding(e.to_string()))?;
        let mut blob = Vec::with_capacity(CHECKSUM_LENGTH + body.len());
        blob.extend_from_slice(&sha256(&body));
        blob.extend_from_slice(&body);
        Ok(blob)
    }

    /// Verify the checksum and decode.
    pub fn decode(blob: &[u8]) -> Result<Self, SynthesisError> {
        if blob.len() < CHECKSUM_LENGTH {
            return Err(SynthesisError::Encoding(format!(
                "blob of {} bytes has no checksum",
                blob.len()
            )));
        }
        let (checksum, body) = blob.split_at(CHECKSUM_LENGTH);
        if checksum != sha256(body).as_slice() {
            return Err(SynthesisError::Encoding("checksum mismatch".to_string()));
        }
        bincode::deserialize(body).map_err(|e| SynthesisError::Encoding(e.to_string()))
    }
}

/// Deterministic committee synthesizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceSynthesizer;

impl ReferenceSynthesizer {
    /// Create the synthesizer.
    pub fn new() -> Self {
        Self
    }

    fn validate(&self, request: &SynthesisRequest) -> Result<(), SynthesisError> {
        let n = request.identities.len();
        if n == 0 || n > MAX_ORACLES {
            return Err(SynthesisError::InvalidCommitteeSize {
                n,
                max: MAX_ORACLES,
            });
        }
        if 3 * request.fault_tolerance >= n {
            return Err(SynthesisError::FaultToleranceInfeasible {
                n,
                f: request.fault_tolerance,
            });
        }

        if request.weights.len() != n {
            return Err(SynthesisError::InvalidWeights(format!(
                "{} weights for {} oracles",
                request.weights.len(),
                n
            )));
        }
        if let Some(index) = request.weights.iter().position(|w| *w == 0) {
            return Err(SynthesisError::InvalidWeights(format!(
                "oracle {index} has zero weight"
            )));
        }

        validate_timing(&request.timing)?;

        for (index, identity) in request.identities.iter().enumerate() {
            if identity.peer_id.is_empty() {
                return Err(SynthesisError::MissingField {
                    index,
                    field: "peer id",
                });
            }
            if identity.transmit_account.is_empty() {
                return Err(SynthesisError::MissingField {
                    index,
                    field: "transmitter",
                });
            }
        }

        let ids = &request.identities;
        check_unique("peer id", ids.iter().map(|id| id.peer_id.as_str()))?;
        check_unique("offchain public key", ids.iter().map(|id| id.offchain_public_key))?;
        check_unique("onchain address", ids.iter().map(|id| id.onchain_public_key))?;
        Ok(())
    }
}

impl CommitteeSynthesizer for ReferenceSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult, SynthesisError> {
        self.validate(request)?;

        let f = u8::try_from(request.fault_tolerance).map_err(|_| {
            SynthesisError::FaultToleranceInfeasible {
                n: request.identities.len(),
                f: request.fault_tolerance,
            }
        })?;
        let timing = &request.timing;
        let ids = &request.identities;

        let blob = OffchainConfigBlob {
            delta_progress_nanos: nanos("deltaProgress", timing.delta_progress)?,
            delta_resend_nanos: nanos("deltaResend", timing.delta_resend)?,
            delta_initial_nanos: nanos("deltaInitial", timing.delta_initial)?,
            delta_round_nanos: nanos("deltaRound", timing.delta_round)?,
            delta_grace_nanos: nanos("deltaGrace", timing.delta_grace)?,
            delta_certified_commit_request_nanos: nanos(
                "deltaCertifiedCommitRequest",
                timing.delta_certified_commit_request,
            )?,
            delta_stage_nanos: nanos("deltaStage", timing.delta_stage)?,
            r_max: timing.r_max,
            weights: request.weights.iter().map(|w| *w as u64).collect(),
            peer_ids: ids.iter().map(|id| id.peer_id.clone()).collect(),
            offchain_public_keys: ids.iter().map(|id| *id.offchain_public_key.as_bytes()).collect(),
            config_encryption_public_keys: ids
                .iter()
                .map(|id| *id.config_encryption_public_key.as_bytes())
                .collect(),
            reporting_plugin_config: request.plugin_config.clone(),
            max_duration_initialization_nanos: timing
                .max_duration_initialization
                .map(|d| nanos("maxDurationInitialization", d))
                .transpose()?,
            max_duration_query_nanos: nanos("maxDurationQuery", timing.max_duration_query)?,
            max_duration_observation_nanos: nanos(
                "maxDurationObservation",
                timing.max_duration_observation,
            )?,
            max_duration_should_accept_attested_report_nanos: nanos(
                "maxDurationShouldAcceptAttestedReport",
                timing.max_duration_should_accept_attested_report,
            )?,
            max_duration_should_transmit_accepted_report_nanos: nanos(
                "maxDurationShouldTransmitAcceptedReport",
                timing.max_duration_should_transmit_accepted_report,
            )?,
            f,
            onchain_config: request.onchain_config.clone(),
            identity_commitment: identity_commitment(ids),
        };
        let offchain_config = blob.encode()?;

        debug!(
            "[ocr-config] Synthesized committee of {} (f={}), blob {} bytes",
            ids.len(),
            f,
            offchain_config.len()
        );

        Ok(SynthesisResult {
            signers: ids
                .iter()
                .map(|id| id.onchain_public_key.as_bytes().to_vec())
                .collect(),
            transmitters: ids.iter().map(|id| id.transmit_account.clone()).collect(),
            f,
            offchain_config_version: OFFCHAIN_CONFIG_VERSION,
            offchain_config,
        })
    }
}

fn validate_timing(timing: &TimingParameters) -> Result<(), SynthesisError> {
    if timing.r_max == 0 {
        return Err(SynthesisError::InvalidTiming("rMax must be positive".to_string()));
    }
    if timing.delta_round >= timing.delta_progress {
        return Err(SynthesisError::InvalidTiming(format!(
            "deltaRound ({:?}) must be below deltaProgress ({:?})",
            timing.delta_round, timing.delta_progress
        )));
    }
    if timing.delta_grace > timing.delta_round {
        return Err(SynthesisError::InvalidTiming(format!(
            "deltaGrace ({:?}) must not exceed deltaRound ({:?})",
            timing.delta_grace, timing.delta_round
        )));
    }
    if timing.delta_resend.is_zero() {
        return Err(SynthesisError::InvalidTiming(
            "deltaResend must be positive".to_string(),
        ));
    }
    Ok(())
}

fn nanos(name: &str, duration: Duration) -> Result<u64, SynthesisError> {
    u64::try_from(duration.as_nanos())
        .map_err(|_| SynthesisError::InvalidTiming(format!("{name} overflows u64 nanoseconds")))
}

/// First repeated value, reported by both positions.
fn check_unique<K: Eq + StdHash>(
    field: &'static str,
    values: impl Iterator<Item = K>,
) -> Result<(), SynthesisError> {
    let mut seen = HashMap::new();
    for (index, value) in values.enumerate() {
        if let Some(first) = seen.insert(value, index) {
            return Err(SynthesisError::DuplicateIdentity {
                field,
                first,
                second: index,
            });
        }
    }
    Ok(())
}

fn identity_commitment(identities: &[OracleIdentity]) -> Hash {
    let parts: Vec<&[u8]> = identities
        .iter()
        .flat_map(|id| {
            [
                id.onchain_public_key.as_bytes().as_slice(),
                id.offchain_public_key.as_bytes().as_slice(),
                id.config_encryption_public_key.as_bytes().as_slice(),
                id.peer_id.as_bytes(),
                id.transmit_account.as_bytes(),
            ]
        })
        .collect();
    sha256_many(&parts)
}
