//! # OCR3 Contract Configuration Generator
//!
//! Turns a list of oracle node descriptors and a plugin type into the
//! configuration an OCR3 contract needs: checksummed signers, transmitters,
//! fault tolerance `f`, and a versioned offchain config blob.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Pipeline
//!
//! ```text
//! UnifiedRequest
//!   │
//!   ├─→ identity_decoder   (prefix strip, hex decode, key sizes)
//!   ├─→ parameter_table    (plugin config record + timing)
//!   ├─→ CommitteeSynthesizer (outbound port)
//!   └─→ output_encoder     (EIP-55 signers, hex blob, digest)
//!         │
//!         ↓
//!   OutputConfig
//! ```
//!
//! ## Plugins
//!
//! | Plugin | Config record | Digest |
//! |--------|---------------|--------|
//! | `automation` | Automation offchain config | no |
//! | `commit` | CCIP commit offchain config | yes |
//! | `exec` | CCIP execute offchain config | yes |
//!
//! ## Module Structure
//!
//! ```text
//! ocr-config-gen/
//! ├── domain/          # Requests, identities, plugin records, timing, errors
//! ├── algorithms/      # Decoder, parameter table, output encoder
//! ├── ports/           # ConfigGenerationApi, CommitteeSynthesizer
//! ├── adapters/        # ReferenceSynthesizer
//! ├── config.rs        # GeneratorConfig, KeyLengthPolicy
//! └── service.rs       # ConfigGenerationService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{OffchainConfigBlob, ReferenceSynthesizer, MAX_ORACLES, OFFCHAIN_CONFIG_VERSION};
pub use algorithms::{
    config_digest, decode_identities, decode_identity, encode_output, plugin_parameters,
    timing_parameters, PluginParameters,
};
pub use config::{GeneratorConfig, KeyLengthPolicy};
pub use domain::{
    fault_tolerance, ChainSelector, ConfigGenError, KeyField, NodeDescriptor, OracleIdentity,
    OutputConfig, PluginConfigRecord, PluginType, SynthesisResult, TimingParameters,
    UnifiedRequest,
};
pub use ports::{
    CommitteeSynthesizer, ConfigGenerationApi, MockSynthesizer, SynthesisError, SynthesisRequest,
};
pub use service::ConfigGenerationService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
