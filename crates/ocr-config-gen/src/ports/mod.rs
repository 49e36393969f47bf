//! # Ports Module
//!
//! Hexagonal architecture ports for the generator.

pub mod inbound;
pub mod outbound;

pub use inbound::ConfigGenerationApi;
pub use outbound::{CommitteeSynthesizer, MockSynthesizer, SynthesisError, SynthesisRequest};
