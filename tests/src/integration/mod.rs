//! # Integration Tests
//!
//! Request → output flows through the public API.

pub mod pipeline_flows;
