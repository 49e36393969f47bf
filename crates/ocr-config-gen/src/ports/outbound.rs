//! # Outbound Ports
//!
//! Committee synthesis: turns identities and parameters into the signer set,
//! transmitter set and offchain config blob. The algorithm lives behind this
//! trait so alternative or mocked implementations can be substituted.

use crate::domain::{OracleIdentity, SynthesisResult, TimingParameters};
use thiserror::Error;

/// Everything committee synthesis needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// Protocol timing and phase ceilings.
    pub timing: TimingParameters,
    /// Inclusion weight per oracle, aligned with `identities`.
    pub weights: Vec<usize>,
    /// Committee in canonical order.
    pub identities: Vec<OracleIdentity>,
    /// Serialized plugin config record.
    pub plugin_config: Vec<u8>,
    /// Fault tolerance `f`.
    pub fault_tolerance: usize,
    /// Onchain config bytes.
    pub onchain_config: Vec<u8>,
}

/// Committee synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// Committee size outside the supported range.
    #[error("Invalid committee size {n}: must be between 1 and {max}")]
    InvalidCommitteeSize {
        /// Oracles supplied
        n: usize,
        /// Maximum supported
        max: usize,
    },

    /// `3f + 1 > n`.
    #[error("Fault tolerance infeasible: 3*{f} + 1 > {n}")]
    FaultToleranceInfeasible {
        /// Oracles supplied
        n: usize,
        /// Requested fault tolerance
        f: usize,
    },

    /// Weight vector does not fit the committee.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Timing parameters are inconsistent.
    #[error("Invalid timing: {0}")]
    InvalidTiming(String),

    /// Two oracles share an identity component.
    #[error("Duplicate {field} at oracles {first} and {second}")]
    DuplicateIdentity {
        /// Identity component name
        field: &'static str,
        /// First occurrence
        first: usize,
        /// Second occurrence
        second: usize,
    },

    /// A required identity component is empty.
    #[error("Oracle {index} has empty {field}")]
    MissingField {
        /// Oracle index
        index: usize,
        /// Identity component name
        field: &'static str,
    },

    /// Blob encoding failed.
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

/// Committee synthesis - outbound port.
///
/// Implementations must be deterministic for identical requests and must not
/// keep state between calls.
pub trait CommitteeSynthesizer: Send + Sync {
    /// Synthesize the contract configuration for a committee.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult, SynthesisError>;
}

impl<T: CommitteeSynthesizer + ?Sized> CommitteeSynthesizer for &T {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult, SynthesisError> {
        (**self).synthesize(request)
    }
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock synthesizer for testing.
///
/// Echoes the committee in order. The blob is `blob` when set, otherwise the
/// serialized plugin config, so tests can read the plugin config back out of
/// the output.
#[derive(Clone, Debug, Default)]
pub struct MockSynthesizer {
    /// Fixed blob to return.
    pub blob: Option<Vec<u8>>,
    /// Version to report.
    pub version: u64,
    /// Fail every call?
    pub should_fail: bool,
    /// Drop the last transmitter from the result.
    pub drop_transmitter: bool,
}

impl CommitteeSynthesizer for MockSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult, SynthesisError> {
        if self.should_fail {
            return Err(SynthesisError::FaultToleranceInfeasible {
                n: request.identities.len(),
                f: request.fault_tolerance,
            });
        }

        let mut transmitters: Vec<String> = request
            .identities
            .iter()
            .map(|id| id.transmit_account.clone())
            .collect();
        if self.drop_transmitter {
            transmitters.pop();
        }

        Ok(SynthesisResult {
            signers: request
                .identities
                .iter()
                .map(|id| id.onchain_public_key.as_bytes().to_vec())
                .collect(),
            transmitters,
            f: u8::try_from(request.fault_tolerance).unwrap_or(u8::MAX),
            offchain_config_version: self.version,
            offchain_config: self
                .blob
                .clone()
                .unwrap_or_else(|| request.plugin_config.clone()),
        })
    }
}
