//! Contract Settings Library
//!
//! Resolves compiler and network settings for smart contract builds and
//! deployments from environment variables.

pub mod compiler;
pub mod env;
pub mod error;
pub mod network;
pub mod resolver;
pub mod settings;
pub mod validate;

pub use compiler::CompilerProfile;
pub use env::EnvInputs;
pub use error::SettingsError;
pub use network::{GasPrice, Network, NetworkProfile};
pub use resolver::resolve;
pub use settings::Settings;
pub use validate::{validate, FieldIssue, IssueKind, ValidationReport};
