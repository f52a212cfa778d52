//! Environment inputs for settings resolution
//!
//! The resolver never reads the process environment itself. Instead an
//! [`EnvInputs`] snapshot is taken once, after the `.env` loader has run,
//! and handed to [`crate::resolve`].

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::SettingsError;
use crate::network::Network;

/// Signing key shared by every network profile
pub const PRIVATE_KEY_VAR: &str = "PRIVATEKEY";

/// Every variable name the resolver consumes
pub fn tracked_vars() -> Vec<&'static str> {
    let mut vars = vec![PRIVATE_KEY_VAR];
    vars.extend(Network::ALL.iter().map(|n| n.endpoint_var()));
    vars
}

/// Snapshot of environment variable values keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvInputs {
    vars: BTreeMap<String, String>,
}

impl EnvInputs {
    /// Empty snapshot, every variable absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the env file loader, then snapshot the tracked variables
    ///
    /// With no explicit path, `.env` is looked up from the current directory
    /// upwards and a missing file is ignored. An explicit path must load.
    /// Values already present in the process environment are kept.
    pub fn load(env_file: Option<&Path>) -> Result<Self, SettingsError> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path)?;
                debug!(path = %path.display(), "Loaded env file");
            }
            None => match dotenvy::dotenv() {
                Ok(path) => debug!(path = %path.display(), "Loaded env file"),
                Err(e) if e.not_found() => debug!("No .env file found"),
                Err(e) => return Err(e.into()),
            },
        }

        Ok(Self::from_process())
    }

    /// Snapshot the tracked variables from the process environment
    pub fn from_process() -> Self {
        tracked_vars()
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (name, value)))
            .collect()
    }

    /// Parse an env file into a snapshot without touching the process environment
    pub fn from_env_file(path: &Path) -> Result<Self, SettingsError> {
        let mut inputs = Self::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            inputs.set(key, value);
        }
        Ok(inputs)
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvInputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (name, value) in iter {
            inputs.set(name, value);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_tracked_vars() {
        assert_eq!(
            tracked_vars(),
            vec!["PRIVATEKEY", "GOERLI_NETWORK", "MUMBAI_NETWORK"]
        );
    }

    #[test]
    fn test_get_absent() {
        let inputs = EnvInputs::new();
        assert!(inputs.is_empty());
        assert_eq!(inputs.get("PRIVATEKEY"), None);
    }

    #[test]
    fn test_from_iter_last_value_wins() {
        let inputs: EnvInputs = [("PRIVATEKEY", "0x1"), ("PRIVATEKEY", "0x2")]
            .into_iter()
            .collect();
        assert_eq!(inputs.get("PRIVATEKEY"), Some("0x2"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let inputs: EnvInputs = [("GOERLI_NETWORK", "")].into_iter().collect();
        assert_eq!(inputs.get("GOERLI_NETWORK"), Some(""));
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# deploy secrets").unwrap();
        writeln!(file, "PRIVATEKEY=0xabc").unwrap();
        writeln!(file, "GOERLI_NETWORK=\"https://g.example\"").unwrap();

        let inputs = EnvInputs::from_env_file(file.path()).unwrap();
        assert_eq!(inputs.get("PRIVATEKEY"), Some("0xabc"));
        assert_eq!(inputs.get("GOERLI_NETWORK"), Some("https://g.example"));
        assert_eq!(inputs.get("MUMBAI_NETWORK"), None);
    }

    #[test]
    fn test_from_env_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = EnvInputs::from_env_file(&dir.path().join("missing.env"));
        assert!(matches!(result, Err(SettingsError::EnvFile(_))));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = EnvInputs::load(Some(&dir.path().join("missing.env")));
        assert!(result.is_err());
    }
}
