//! # Configuration Generation Service
//!
//! Application service layer that implements the `ConfigGenerationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ConfigGenerationApi`)
//! - Uses the outbound port (`CommitteeSynthesizer`) for committee synthesis
//! - Delegates decoding, parameter lookup and encoding to the algorithms layer

use crate::algorithms::{decode_identities, encode_output, plugin_parameters};
use crate::config::GeneratorConfig;
use crate::domain::{
    fault_tolerance, invariant_committee_size, ConfigGenError, OutputConfig, UnifiedRequest,
};
use crate::ports::inbound::ConfigGenerationApi;
use crate::ports::outbound::{CommitteeSynthesizer, SynthesisRequest};
use tracing::{debug, info};

/// Configuration Generation Service.
///
/// Stateless apart from its configuration: one call turns one request into
/// one contract configuration.
pub struct ConfigGenerationService<S: CommitteeSynthesizer> {
    synthesizer: S,
    config: GeneratorConfig,
}

impl<S: CommitteeSynthesizer> ConfigGenerationService<S> {
    /// Create a new service.
    ///
    /// # Arguments
    /// * `synthesizer` - Committee synthesis implementation
    /// * `config` - Generator configuration
    pub fn new(synthesizer: S, config: GeneratorConfig) -> Self {
        Self {
            synthesizer,
            config,
        }
    }

    /// Generator configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl<S: CommitteeSynthesizer> ConfigGenerationApi for ConfigGenerationService<S> {
    fn generate(&self, request: &UnifiedRequest) -> Result<OutputConfig, ConfigGenError> {
        let plugin = request.plugin()?;
        let selector = request.price_feed_selector()?;

        let identities = decode_identities(&request.nodes, self.config.key_length_policy)?;
        debug!("[ocr-config] Decoded {} oracle identities", identities.len());

        let parameters = plugin_parameters(plugin, selector);
        let plugin_config = parameters.config.to_bytes()?;
        debug!(
            "[ocr-config] Plugin {} config is {} bytes",
            plugin,
            plugin_config.len()
        );

        let n = identities.len();
        let synthesis_request = SynthesisRequest {
            timing: parameters.timing,
            weights: vec![1; n],
            identities,
            plugin_config,
            fault_tolerance: fault_tolerance(n),
            onchain_config: Vec::new(),
        };
        let result = self
            .synthesizer
            .synthesize(&synthesis_request)
            .map_err(|e| ConfigGenError::SynthesisRejected(e.to_string()))?;
        invariant_committee_size(&result, n)?;
        debug!("[ocr-config] Synthesis complete");

        let output = encode_output(&result, plugin);
        info!(
            plugin = %plugin,
            nodes = n,
            f = result.f,
            version = result.offchain_config_version,
            blob_bytes = result.offchain_config.len(),
            "contract configuration generated"
        );
        Ok(output)
    }
}
