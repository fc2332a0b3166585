use anyhow::Context;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

/// Read when the config file has no `bearer_token`.
pub const BEARER_TOKEN_ENV: &str = "WARBLER_BEARER_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Applies to each request as a whole, connect included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    warbler_client::DEFAULT_API_BASE.to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        serde_yaml::from_str(
            &read_to_string(path)
                .context("Failed to read config file from disk, is it present?")?,
        )
        .context("Failed to deserialize config file, please make sure its in the right format")
    }

    pub fn bearer_token(&self) -> anyhow::Result<String> {
        self.bearer_token_or(std::env::var(BEARER_TOKEN_ENV).ok())
    }

    /// An empty `bearer_token` counts as unset, so `fallback` is used.
    fn bearer_token_or(&self, fallback: Option<String>) -> anyhow::Result<String> {
        self.bearer_token
            .clone()
            .filter(|t| !t.is_empty())
            .or(fallback)
            .with_context(|| {
                format!("No bearer_token in config file and {BEARER_TOKEN_ENV} is not set")
            })
    }
}
