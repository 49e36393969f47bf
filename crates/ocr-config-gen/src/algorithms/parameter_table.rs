//! # Plugin Parameter Table
//!
//! Plugin type → (default config record, timing parameters). The values are
//! operational constants tuned per plugin and are reproduced verbatim, never
//! derived.

use crate::domain::{
    AutomationOffchainConfig, ChainSelector, CommitOffchainConfig, ExecuteOffchainConfig,
    PluginConfigRecord, PluginType, TimingParameters, AUTOMATION_TIMING, COMMIT_TIMING,
    EXEC_TIMING,
};
use std::collections::BTreeMap;
use std::time::Duration;

/// Config record plus timing for one plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginParameters {
    /// Plugin offchain config record.
    pub config: PluginConfigRecord,
    /// Protocol timing.
    pub timing: TimingParameters,
}

/// Look up the parameters for a plugin.
///
/// `price_feed_selector` only affects the commit record.
pub fn plugin_parameters(
    plugin: PluginType,
    price_feed_selector: Option<ChainSelector>,
) -> PluginParameters {
    let config = match plugin {
        PluginType::Automation => PluginConfigRecord::Automation(automation_config()),
        PluginType::Commit => PluginConfigRecord::Commit(commit_config(
            price_feed_selector.unwrap_or_default(),
        )),
        PluginType::Exec => PluginConfigRecord::Exec(exec_config()),
    };
    PluginParameters {
        config,
        timing: *timing_parameters(plugin),
    }
}

/// Timing table entry for a plugin.
pub fn timing_parameters(plugin: PluginType) -> &'static TimingParameters {
    match plugin {
        PluginType::Automation => &AUTOMATION_TIMING,
        PluginType::Commit => &COMMIT_TIMING,
        PluginType::Exec => &EXEC_TIMING,
    }
}

/// Automation defaults.
pub fn automation_config() -> AutomationOffchainConfig {
    AutomationOffchainConfig {
        version: String::new(),
        perform_lockout_window: 3_600_000,
        target_probability: "0.999".to_string(),
        target_in_rounds: 1,
        min_confirmations: 0,
        gas_limit_per_report: 5_300_000,
        gas_overhead_per_upkeep: 300_000,
        max_upkeep_batch_size: 1,
    }
}

/// Commit defaults. All async observers are disabled.
pub fn commit_config(price_feed_chain_selector: ChainSelector) -> CommitOffchainConfig {
    CommitOffchainConfig {
        remote_gas_price_batch_write_frequency: Duration::from_secs(10 * 60),
        token_price_batch_write_frequency: Duration::from_secs(60 * 60),
        token_info: BTreeMap::new(),
        price_feed_chain_selector,
        new_msg_scan_batch_size: 128,
        max_report_transmission_check_attempts: 3,
        rmn_enabled: false,
        rmn_signatures_timeout: Duration::from_secs(10 * 60),
        max_merkle_tree_size: 128,
        sign_observation_prefix: "ccip 1.6 rmn".to_string(),
        transmission_delay_multiplier: Duration::from_secs(10),
        inflight_price_check_retries: 5,
        merkle_root_async_observer_disabled: true,
        merkle_root_async_observer_sync_freq: Duration::ZERO,
        merkle_root_async_observer_sync_timeout: Duration::ZERO,
        chain_fee_async_observer_disabled: true,
        chain_fee_async_observer_sync_freq: Duration::ZERO,
        chain_fee_async_observer_sync_timeout: Duration::ZERO,
        token_price_async_observer_disabled: true,
        token_price_async_observer_sync_freq: Duration::ZERO,
        token_price_async_observer_sync_timeout: Duration::ZERO,
    }
}

/// Execute defaults.
pub fn exec_config() -> ExecuteOffchainConfig {
    ExecuteOffchainConfig {
        batch_gas_limit: 5_000_000,
        inflight_cache_expiry: Duration::from_secs(30),
        root_snooze_time: Duration::from_secs(2 * 60),
        message_visibility_interval: Duration::from_secs(30 * 60),
        batching_strategy_id: 0,
        token_data_observers: Vec::new(),
        transmission_delay_multiplier: Duration::from_secs(10),
        max_report_messages: 10,
        max_single_chain_reports: 10,
    }
}
