//! # Plugin Configuration Records
//!
//! Offchain config records embedded (as JSON) in the OCR3 config blob. Field
//! names and order follow what plugin nodes decode.

use super::duration_text::DurationText;
use super::errors::ConfigGenError;
use super::value_objects::ChainSelector;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationNanoSeconds};
use std::collections::BTreeMap;
use std::time::Duration;

/// Automation offchain config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationOffchainConfig {
    /// Config schema version, empty for the current schema.
    pub version: String,
    /// Lockout window after a perform, in milliseconds.
    pub perform_lockout_window: i64,
    /// Probability that an eligible upkeep is performed within `target_in_rounds`.
    pub target_probability: String,
    /// Rounds over which `target_probability` applies.
    pub target_in_rounds: i64,
    /// Block confirmations before an upkeep is considered.
    pub min_confirmations: i64,
    /// Gas ceiling for one report.
    pub gas_limit_per_report: u32,
    /// Gas overhead added per upkeep.
    pub gas_overhead_per_upkeep: u32,
    /// Upkeeps per report.
    pub max_upkeep_batch_size: i64,
}

/// Per-token pricing metadata for the commit plugin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Price feed aggregator address.
    pub aggregator_address: String,
    /// Price deviation threshold in parts per billion.
    #[serde(rename = "deviationPPB")]
    pub deviation_ppb: String,
    /// Token decimals.
    pub decimals: u8,
}

/// CCIP commit offchain config.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOffchainConfig {
    /// How often remote gas prices are written.
    #[serde_as(as = "DurationText")]
    pub remote_gas_price_batch_write_frequency: Duration,
    /// How often token prices are written.
    #[serde_as(as = "DurationText")]
    pub token_price_batch_write_frequency: Duration,
    /// Token address to pricing metadata.
    pub token_info: BTreeMap<String, TokenInfo>,
    /// Chain that hosts the price feeds.
    pub price_feed_chain_selector: ChainSelector,
    /// Messages scanned per batch.
    pub new_msg_scan_batch_size: i64,
    /// Attempts to confirm a report transmission.
    pub max_report_transmission_check_attempts: u64,
    /// Whether RMN signatures are collected.
    pub rmn_enabled: bool,
    /// Timeout for collecting RMN signatures.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub rmn_signatures_timeout: Duration,
    /// Maximum merkle tree size.
    #[serde(rename = "maxTreeSize")]
    pub max_merkle_tree_size: u64,
    /// Domain separation prefix for signed observations.
    pub sign_observation_prefix: String,
    /// Delay multiplier between transmitters.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub transmission_delay_multiplier: Duration,
    /// Retries for inflight price checks.
    pub inflight_price_check_retries: i64,
    /// Disables the merkle root background observer.
    pub merkle_root_async_observer_disabled: bool,
    /// Merkle root observer sync frequency.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub merkle_root_async_observer_sync_freq: Duration,
    /// Merkle root observer sync timeout.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub merkle_root_async_observer_sync_timeout: Duration,
    /// Disables the chain fee background observer.
    pub chain_fee_async_observer_disabled: bool,
    /// Chain fee observer sync frequency.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub chain_fee_async_observer_sync_freq: Duration,
    /// Chain fee observer sync timeout.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub chain_fee_async_observer_sync_timeout: Duration,
    /// Disables the token price background observer.
    pub token_price_async_observer_disabled: bool,
    /// Token price observer sync frequency.
    #[serde_as(as = "DurationText")]
    pub token_price_async_observer_sync_freq: Duration,
    /// Token price observer sync timeout.
    #[serde_as(as = "DurationText")]
    pub token_price_async_observer_sync_timeout: Duration,
}

/// Token data observer entry for the execute plugin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDataObserverConfig {
    /// Observer type, e.g. `usdc-cctp`.
    #[serde(rename = "type")]
    pub observer_type: String,
    /// Observer config version.
    pub version: String,
}

/// CCIP execute offchain config.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOffchainConfig {
    /// Gas ceiling for one execution batch.
    pub batch_gas_limit: u64,
    /// Expiry of the inflight message cache.
    #[serde_as(as = "DurationText")]
    pub inflight_cache_expiry: Duration,
    /// How long a root is snoozed after a failed execution.
    #[serde_as(as = "DurationText")]
    pub root_snooze_time: Duration,
    /// How far back messages are considered.
    #[serde_as(as = "DurationText")]
    pub message_visibility_interval: Duration,
    /// Batching strategy identifier.
    #[serde(rename = "batchingStrategyID")]
    pub batching_strategy_id: u32,
    /// Token data observers.
    pub token_data_observers: Vec<TokenDataObserverConfig>,
    /// Delay multiplier between transmitters.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub transmission_delay_multiplier: Duration,
    /// Messages per report.
    pub max_report_messages: u64,
    /// Single-chain reports per round.
    pub max_single_chain_reports: u64,
}

/// A plugin configuration record of any supported plugin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PluginConfigRecord {
    /// Automation record.
    Automation(AutomationOffchainConfig),
    /// Commit record.
    Commit(CommitOffchainConfig),
    /// Execute record.
    Exec(ExecuteOffchainConfig),
}

impl PluginConfigRecord {
    /// Canonical byte encoding handed to committee synthesis (compact JSON).
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigGenError> {
        serde_json::to_vec(self).map_err(|e| ConfigGenError::SerializationFailure(e.to_string()))
    }
}
