//! # OCR3 Timing Parameters
//!
//! Round-progress margins and per-phase ceilings handed to committee synthesis.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationNanoSeconds};
use std::time::Duration;

/// Protocol timing parameters for one plugin.
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingParameters {
    /// Time a leader has to make progress before a new epoch starts.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_progress: Duration,
    /// Resend interval for unacknowledged messages.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_resend: Duration,
    /// Delay before the first round of an epoch.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_initial: Duration,
    /// Minimum round length.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_round: Duration,
    /// Grace period for slow observations.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_grace: Duration,
    /// Resend interval for certified commit requests.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_certified_commit_request: Duration,
    /// Transmission stage delay between oracles.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub delta_stage: Duration,
    /// Maximum rounds per epoch.
    pub r_max: u64,
    /// Ceiling for plugin initialization, unbounded when absent.
    #[serde_as(as = "Option<DurationNanoSeconds<u64>>")]
    pub max_duration_initialization: Option<Duration>,
    /// Ceiling for the query phase.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub max_duration_query: Duration,
    /// Ceiling for the observation phase.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub max_duration_observation: Duration,
    /// Ceiling for deciding whether to accept an attested report.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub max_duration_should_accept_attested_report: Duration,
    /// Ceiling for deciding whether to transmit an accepted report.
    #[serde_as(as = "DurationNanoSeconds<u64>")]
    pub max_duration_should_transmit_accepted_report: Duration,
}

/// CCIP commit timing.
pub const COMMIT_TIMING: TimingParameters = TimingParameters {
    delta_progress: Duration::from_secs(30),
    delta_resend: Duration::from_secs(10),
    delta_initial: Duration::from_secs(20),
    delta_round: Duration::from_secs(2),
    delta_grace: Duration::from_secs(2),
    delta_certified_commit_request: Duration::from_secs(10),
    delta_stage: Duration::from_secs(10),
    r_max: 10,
    max_duration_initialization: None,
    max_duration_query: Duration::from_secs(10),
    max_duration_observation: Duration::from_secs(13),
    max_duration_should_accept_attested_report: Duration::from_secs(5),
    max_duration_should_transmit_accepted_report: Duration::from_secs(10),
};

/// CCIP execute timing. Execute has no query phase worth bounding.
pub const EXEC_TIMING: TimingParameters = TimingParameters {
    delta_progress: Duration::from_secs(30),
    delta_resend: Duration::from_secs(10),
    delta_initial: Duration::from_secs(20),
    delta_round: Duration::from_secs(2),
    delta_grace: Duration::from_secs(2),
    delta_certified_commit_request: Duration::from_secs(10),
    delta_stage: Duration::from_secs(10),
    r_max: 10,
    max_duration_initialization: None,
    max_duration_query: Duration::from_millis(100),
    max_duration_observation: Duration::from_secs(13),
    max_duration_should_accept_attested_report: Duration::from_secs(5),
    max_duration_should_transmit_accepted_report: Duration::from_secs(10),
};

/// Automation timing.
pub const AUTOMATION_TIMING: TimingParameters = TimingParameters {
    delta_progress: Duration::from_secs(30),
    delta_resend: Duration::from_secs(10),
    delta_initial: Duration::from_secs(1),
    delta_round: Duration::from_secs(1),
    delta_grace: Duration::from_millis(500),
    delta_certified_commit_request: Duration::from_secs(10),
    delta_stage: Duration::from_secs(60),
    r_max: 3,
    max_duration_initialization: None,
    max_duration_query: Duration::from_secs(20),
    max_duration_observation: Duration::from_secs(1),
    max_duration_should_accept_attested_report: Duration::from_secs(10),
    max_duration_should_transmit_accepted_report: Duration::from_secs(10),
};
