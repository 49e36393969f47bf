//! # Generator Configuration
//!
//! Defaults, overridden by environment variables, overridden by CLI flags.
//!
//! | Variable | Values | Effect |
//! |----------|--------|--------|
//! | `OCR_KEY_LENGTH_POLICY` | `strict`, `legacy` | Key length handling |
//! | `OCR_PRETTY_OUTPUT` | `1`, `true` | Indented JSON output |

use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Environment variable selecting the key length policy.
pub const ENV_KEY_LENGTH_POLICY: &str = "OCR_KEY_LENGTH_POLICY";

/// Environment variable enabling indented output.
pub const ENV_PRETTY_OUTPUT: &str = "OCR_PRETTY_OUTPUT";

/// How decoded keys of the wrong length are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyLengthPolicy {
    /// Wrong lengths fail with `InvalidKeyLength`.
    #[default]
    Strict,
    /// Offchain and config keys are zero-padded or truncated to 32 bytes, the
    /// onchain key is normalized to 20 bytes. Matches configs produced by
    /// earlier deployment tooling.
    LegacyZeroPad,
}

impl FromStr for KeyLengthPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "legacy" | "zero-pad" | "legacy-zero-pad" => Ok(Self::LegacyZeroPad),
            other => Err(format!("unknown key length policy {other:?}")),
        }
    }
}

impl fmt::Display for KeyLengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::LegacyZeroPad => f.write_str("legacy"),
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Key length handling.
    pub key_length_policy: KeyLengthPolicy,
    /// Indent the JSON output.
    pub pretty_output: bool,
}

impl GeneratorConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_KEY_LENGTH_POLICY) {
            match value.parse() {
                Ok(policy) => config.key_length_policy = policy,
                Err(e) => warn!("{ENV_KEY_LENGTH_POLICY}: {e}"),
            }
        }

        if let Some(value) = lookup(ENV_PRETTY_OUTPUT) {
            config.pretty_output = matches!(value.trim(), "1" | "true" | "TRUE" | "yes");
        }

        config
    }
}
