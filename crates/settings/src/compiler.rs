//! Solidity compiler profile

use serde::{Serialize, Serializer};

pub const DEFAULT_COMPILER_VERSION: &str = "0.8.17";
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Compiler version and optimizer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerProfile {
    pub version: String,
    pub optimizer_enabled: bool,
    /// Expected number of contract runs the optimizer tunes for
    pub optimizer_runs: u32,
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self {
            version: DEFAULT_COMPILER_VERSION.to_string(),
            optimizer_enabled: true,
            optimizer_runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}

// Serialized in the compile framework's shape:
// { version, settings: { optimizer: { enabled, runs } } }
impl Serialize for CompilerProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Optimizer {
            enabled: bool,
            runs: u32,
        }

        #[derive(Serialize)]
        struct Settings {
            optimizer: Optimizer,
        }

        #[derive(Serialize)]
        struct Compiler<'a> {
            version: &'a str,
            settings: Settings,
        }

        Compiler {
            version: &self.version,
            settings: Settings {
                optimizer: Optimizer {
                    enabled: self.optimizer_enabled,
                    runs: self.optimizer_runs,
                },
            },
        }
        .serialize(serializer)
    }
}

/// Check `MAJOR.MINOR.PATCH[-pre][+build]` syntax
pub fn is_valid_semver(version: &str) -> bool {
    let (rest, build) = match version.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (version, None),
    };
    let (core, pre) = match rest.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (rest, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 || !parts.iter().all(|p| is_numeric_identifier(p)) {
        return false;
    }

    if let Some(pre) = pre {
        let ok = pre.split('.').all(|id| {
            is_identifier(id) && (!id.bytes().all(|b| b.is_ascii_digit()) || is_numeric_identifier(id))
        });
        if !ok {
            return false;
        }
    }

    build.map_or(true, |b| b.split('.').all(is_identifier))
}

fn is_numeric_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
