//! # Domain Module
//!
//! Core types for OCR3 configuration generation.

pub mod duration_text;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod plugin_config;
pub mod timing;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use plugin_config::*;
pub use timing::*;
pub use value_objects::*;
