//! # Domain Value Objects
//!
//! Plugin types, key fields and chain selectors.

use super::errors::ConfigGenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting workload the committee runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginType {
    /// Upkeep automation.
    Automation,
    /// CCIP commit (merkle roots and prices).
    Commit,
    /// CCIP execute.
    Exec,
}

impl PluginType {
    /// All supported plugin types.
    pub const ALL: [PluginType; 3] = [Self::Automation, Self::Commit, Self::Exec];

    /// Wire tag used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::Commit => "commit",
            Self::Exec => "exec",
        }
    }

    /// Whether the contract expects a config digest for this plugin.
    ///
    /// Only the CCIP plugins verify the digest onchain.
    pub fn requires_digest(&self) -> bool {
        matches!(self, Self::Commit | Self::Exec)
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginType {
    type Err = ConfigGenError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|plugin| plugin.as_str() == tag)
            .ok_or_else(|| ConfigGenError::UnsupportedPluginType(tag.to_string()))
    }
}

/// Key fields of a node descriptor, named as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyField {
    /// `onchainKey`: signing address.
    Onchain,
    /// `offchainKey`: Ed25519 public key.
    Offchain,
    /// `configKey`: X25519 public key.
    Config,
}

impl KeyField {
    /// JSON field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onchain => "onchainKey",
            Self::Offchain => "offchainKey",
            Self::Config => "configKey",
        }
    }
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CCIP chain selector (a 64-bit chain identifier).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainSelector(pub u64);

impl ChainSelector {
    /// Parse decimal selector text from a request field.
    pub fn parse(field: &str, text: &str) -> Result<Self, ConfigGenError> {
        text.trim().parse::<u64>().map(Self).map_err(|e| {
            let reason = format!("{field} {text:?} is not a chain selector: {e}");
            ConfigGenError::MalformedRequest(reason)
        })
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_type_from_str() {
        assert_eq!("automation".parse::<PluginType>().unwrap(), PluginType::Automation);
        assert_eq!("commit".parse::<PluginType>().unwrap(), PluginType::Commit);
        assert_eq!("exec".parse::<PluginType>().unwrap(), PluginType::Exec);
    }

    #[test]
    fn test_plugin_type_unknown() {
        let err = "bogus".parse::<PluginType>().unwrap_err();
        assert!(matches!(err, ConfigGenError::UnsupportedPluginType(tag) if tag == "bogus"));
    }

    #[test]
    fn test_plugin_type_is_case_sensitive() {
        assert!("Commit".parse::<PluginType>().is_err());
    }

    #[test]
    fn test_requires_digest() {
        assert!(!PluginType::Automation.requires_digest());
        assert!(PluginType::Commit.requires_digest());
        assert!(PluginType::Exec.requires_digest());
    }

    #[test]
    fn test_key_field_names() {
        assert_eq!(KeyField::Onchain.to_string(), "onchainKey");
        assert_eq!(KeyField::Offchain.to_string(), "offchainKey");
        assert_eq!(KeyField::Config.to_string(), "configKey");
    }

    #[test]
    fn test_chain_selector_parse() {
        assert_eq!(
            ChainSelector::parse("feedChainSelector", "12345").unwrap(),
            ChainSelector(12345)
        );
        assert_eq!(
            ChainSelector::parse("chainSelector", "16015286601757825753").unwrap(),
            ChainSelector(16015286601757825753)
        );
    }

    #[test]
    fn test_chain_selector_rejects_text() {
        let err = ChainSelector::parse("feedChainSelector", "mainnet").unwrap_err();
        assert!(matches!(err, ConfigGenError::MalformedRequest(_)));
    }
}
