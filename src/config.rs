use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "SCP_FETCHER";

/// Runtime settings, read from `SCP_FETCHER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// HTTP request timeout.
    pub timeout_secs: u64,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Degrade failed pages to empty records instead of erroring.
    pub silent: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("timeout_secs", 30)?
            .set_default("log_filter", "error")?
            .set_default("silent", false)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
            .context("Invalid SCP_FETCHER_* settings")
    }
}
