//! # Domain Invariants
//!
//! Committee arithmetic and checks on synthesis output.

use super::entities::SynthesisResult;
use super::errors::ConfigGenError;

/// Fault tolerance for a committee of `n` oracles: `floor((n - 1) / 3)`.
///
/// An empty committee yields 0 and is left for synthesis to reject.
pub fn fault_tolerance(n: usize) -> usize {
    n.saturating_sub(1) / 3
}

/// Invariant: synthesis returns one signer and one transmitter per oracle.
pub fn invariant_committee_size(
    result: &SynthesisResult,
    n: usize,
) -> Result<(), ConfigGenError> {
    if result.signers.len() != n || result.transmitters.len() != n {
        return Err(ConfigGenError::SynthesisRejected(format!(
            "synthesis returned {} signers and {} transmitters for {} oracles",
            result.signers.len(),
            result.transmitters.len(),
            n
        )));
    }
    Ok(())
}
