//! Resolved settings record
//!
//! [`Settings`] is built once by [`crate::resolve`] and then only read. It
//! serializes to the document the compile/deploy framework expects:
//!
//! ```text
//! { "solidity": { "compilers": [ ... ] }, "networks": { "goerli": { ... }, ... } }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::compiler::CompilerProfile;
use crate::error::SettingsError;
use crate::network::{Network, NetworkProfile};
use crate::validate::validate;

/// Number of leading key characters kept in the summary. Keys no longer
/// than this are masked entirely.
const REDACTED_PREFIX_CHARS: usize = 6;

/// Compiler profile plus one profile per network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub compiler: CompilerProfile,
    pub networks: BTreeMap<Network, NetworkProfile>,
}

impl Settings {
    pub fn network(&self, network: Network) -> Option<&NetworkProfile> {
        self.networks.get(&network)
    }

    /// Validate and hand back the settings, or every issue found
    pub fn validated(self) -> Result<Self, SettingsError> {
        validate(&self)?;
        Ok(self)
    }

    /// Framework document as pretty JSON; unset values become `null`
    pub fn to_framework_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Framework document as TOML; unset values are left out
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        let value = strip_nulls(serde_json::to_value(self)?);
        Ok(toml::to_string_pretty(&value)?)
    }

    /// Profile for `network`, or an error if it was never resolved
    pub fn require_network(&self, network: Network) -> Result<&NetworkProfile, SettingsError> {
        self.network(network)
            .ok_or_else(|| SettingsError::UnknownNetwork(network.to_string()))
    }

    /// Human-readable summary with signing keys redacted
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compiler")?;
        writeln!(f, "  Version:             {}", self.compiler.version)?;
        writeln!(
            f,
            "  Optimizer:           {}",
            if self.compiler.optimizer_enabled { "enabled" } else { "disabled" }
        )?;
        writeln!(f, "  Optimizer Runs:      {}", self.compiler.optimizer_runs)?;

        for (network, profile) in &self.networks {
            writeln!(f, "Network {}", network)?;
            writeln!(
                f,
                "  URL:                 {}",
                profile.endpoint_url.as_deref().unwrap_or("(not configured)")
            )?;
            writeln!(f, "  Chain ID:            {}", profile.chain_id)?;
            writeln!(f, "  Gas Price:           {}", profile.gas_price)?;
            for account in &profile.accounts {
                let shown = account
                    .as_deref()
                    .map(redact)
                    .unwrap_or_else(|| "(not configured)".to_string());
                writeln!(f, "  Account:             {}", shown)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Settings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Solidity<'a> {
            compilers: [&'a CompilerProfile; 1],
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(
            "solidity",
            &Solidity {
                compilers: [&self.compiler],
            },
        )?;
        map.serialize_entry("networks", &self.networks)?;
        map.end()
    }
}

fn redact(key: &str) -> String {
    if key.is_empty() {
        return "(empty)".to_string();
    }
    if key.chars().count() <= REDACTED_PREFIX_CHARS {
        return "(redacted)".to_string();
    }
    let prefix: String = key.chars().take(REDACTED_PREFIX_CHARS).collect();
    format!("{prefix}…")
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}
