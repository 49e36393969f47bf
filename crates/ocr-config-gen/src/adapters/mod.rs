//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the outbound ports.

mod reference_synthesizer;

pub use reference_synthesizer::{
    OffchainConfigBlob, ReferenceSynthesizer, MAX_ORACLES, OFFCHAIN_CONFIG_VERSION,
};
