//! Deployment networks and their resolved profiles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;

/// Supported deployment networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum Goerli testnet
    Goerli,
    /// Polygon Mumbai testnet
    Mumbai,
}

impl Network {
    /// Every network, in profile order
    pub const ALL: [Network; 2] = [Network::Goerli, Network::Mumbai];

    /// Get network as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Goerli => "goerli",
            Network::Mumbai => "mumbai",
        }
    }

    /// Fixed chain id. Not derived from the environment and not checked
    /// against whatever node the endpoint points at.
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Goerli => 5,
            Network::Mumbai => 80001,
        }
    }

    /// Environment variable holding the endpoint URL
    pub fn endpoint_var(&self) -> &'static str {
        match self {
            Network::Goerli => "GOERLI_NETWORK",
            Network::Mumbai => "MUMBAI_NETWORK",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "goerli" => Ok(Network::Goerli),
            "mumbai" => Ok(Network::Mumbai),
            other => Err(SettingsError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Transaction fee pricing policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasPrice {
    /// Left to the network client's estimation
    #[default]
    Auto,
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasPrice::Auto => write!(f, "auto"),
        }
    }
}

/// Connection and signing settings for one network
///
/// Field names follow the deploy framework's schema when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Node endpoint, `None` when the variable was unset
    #[serde(rename = "url")]
    pub endpoint_url: Option<String>,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    #[serde(rename = "gasPrice")]
    pub gas_price: GasPrice,
    /// Ordered signing keys; `None` marks an unset key
    pub accounts: Vec<Option<String>>,
}

impl NetworkProfile {
    /// Profile for `network` with the given endpoint and signing key
    pub fn new(network: Network, endpoint_url: Option<String>, key: Option<String>) -> Self {
        Self {
            endpoint_url,
            chain_id: network.chain_id(),
            gas_price: GasPrice::Auto,
            accounts: vec![key],
        }
    }
}
