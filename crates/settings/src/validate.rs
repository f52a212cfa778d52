//! Settings validation
//!
//! Resolution never fails, so this is the single place where missing or
//! malformed values are caught. Every issue is collected and reported
//! together, each naming the field and the variable it came from.

use std::fmt;

use tracing::debug;

use crate::compiler::is_valid_semver;
use crate::env::PRIVATE_KEY_VAR;
use crate::settings::Settings;

/// What is wrong with a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Invalid(String),
}

/// One missing or invalid field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path into the settings, e.g. `networks.goerli.url`
    pub field: String,
    /// Environment variable the value is read from, if any
    pub variable: Option<&'static str>,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{}: missing", self.field)?,
            IssueKind::Invalid(reason) => write!(f, "{}: invalid ({})", self.field, reason)?,
        }
        if let Some(var) = self.variable {
            write!(f, " [set {}]", var)?;
        }
        Ok(())
    }
}

/// All issues found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues for fields under `prefix`
    pub fn issues_for<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a FieldIssue> + 'a {
        self.issues.iter().filter(move |i| i.field.starts_with(prefix))
    }

    fn push(&mut self, field: String, variable: Option<&'static str>, kind: IssueKind) {
        self.issues.push(FieldIssue { field, variable, kind });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Check settings before anything compiles or connects
pub fn validate(settings: &Settings) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if settings.compiler.version.is_empty() {
        report.push("compiler.version".to_string(), None, IssueKind::Missing);
    } else if !is_valid_semver(&settings.compiler.version) {
        report.push(
            "compiler.version".to_string(),
            None,
            IssueKind::Invalid(format!("not a semantic version: {}", settings.compiler.version)),
        );
    }

    if settings.compiler.optimizer_runs == 0 {
        report.push(
            "compiler.optimizer_runs".to_string(),
            None,
            IssueKind::Invalid("must be positive".to_string()),
        );
    }

    for (network, profile) in &settings.networks {
        let url_field = format!("networks.{}.url", network);
        let url_var = Some(network.endpoint_var());
        match profile.endpoint_url.as_deref() {
            None | Some("") => report.push(url_field, url_var, IssueKind::Missing),
            Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                report.push(
                    url_field,
                    url_var,
                    IssueKind::Invalid(format!("must start with http:// or https://: {}", url)),
                );
            }
            Some(_) => {}
        }

        if profile.chain_id == 0 {
            report.push(
                format!("networks.{}.chainId", network),
                None,
                IssueKind::Invalid("must be positive".to_string()),
            );
        }

        if profile.accounts.is_empty() {
            report.push(
                format!("networks.{}.accounts", network),
                Some(PRIVATE_KEY_VAR),
                IssueKind::Missing,
            );
        }

        for (i, account) in profile.accounts.iter().enumerate() {
            let field = format!("networks.{}.accounts[{}]", network, i);
            match account.as_deref() {
                None | Some("") => report.push(field, Some(PRIVATE_KEY_VAR), IssueKind::Missing),
                Some(key) if !is_private_key(key) => report.push(
                    field,
                    Some(PRIVATE_KEY_VAR),
                    IssueKind::Invalid("expected 32 bytes of hex, optionally 0x-prefixed".to_string()),
                ),
                Some(_) => {}
            }
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
        debug!(count = report.issues.len(), ?fields, "Settings failed validation");
        Err(report)
    }
}

fn is_private_key(key: &str) -> bool {
    let hex = match key.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &key[2..],
        _ => key,
    };
    hex.len() == 64 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
