use thiserror::Error;

use crate::validate::ValidationReport;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Configuration validation failed:\n{0}")]
    Validation(ValidationReport),

    #[error("Unknown network: {0}. Must be: goerli or mumbai")]
    UnknownNetwork(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl From<ValidationReport> for SettingsError {
    fn from(report: ValidationReport) -> Self {
        SettingsError::Validation(report)
    }
}
