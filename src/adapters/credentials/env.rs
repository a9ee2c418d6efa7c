//! Process environment and in-memory credential sources.
//!
//! `.env` is loaded by dotenv in main before the chain runs, so values from
//! `.env` show up here as ordinary environment variables.

use crate::ports::CredentialSource;

/// Reads one environment variable (e.g. OPENAI_API_KEY).
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn describe(&self) -> String {
        format!("env {}", self.var)
    }

    fn lookup(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// A value already known at startup (e.g. `api_key` from the config file).
pub struct StaticCredentialSource {
    label: String,
    value: Option<String>,
}

impl StaticCredentialSource {
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl CredentialSource for StaticCredentialSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn lookup(&self) -> Option<String> {
        self.value.clone()
    }
}
