//! # Algorithms Module
//!
//! The pure stages of the generation pipeline.

pub mod identity_decoder;
pub mod output_encoder;
pub mod parameter_table;

pub use identity_decoder::{decode_identities, decode_identity};
pub use output_encoder::{config_digest, encode_output, CONFIG_DIGEST_LENGTH};
pub use parameter_table::{
    automation_config, commit_config, exec_config, plugin_parameters, timing_parameters,
    PluginParameters,
};
