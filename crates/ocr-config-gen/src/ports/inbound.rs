//! # Inbound Ports
//!
//! The API the generator offers to its callers.

use crate::domain::{ConfigGenError, OutputConfig, UnifiedRequest};

/// Contract configuration generation - inbound port.
pub trait ConfigGenerationApi {
    /// Generate the contract configuration for a request.
    ///
    /// Stateless: identical requests yield identical outputs.
    fn generate(&self, request: &UnifiedRequest) -> Result<OutputConfig, ConfigGenError>;

    /// Parse a JSON request and generate its configuration.
    fn generate_from_json(&self, text: &str) -> Result<OutputConfig, ConfigGenError> {
        self.generate(&UnifiedRequest::from_json(text)?)
    }
}
