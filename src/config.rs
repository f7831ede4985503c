// config.rs
use crate::error::Result;
use crate::webhook::DEFAULT_TOLERANCE_SECS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const ENV_PREFIX: &str = "RESEND";

/// Settings read from `RESEND_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub webhook_secret: Option<String>,
    pub bind_address: String,
    pub webhook_tolerance_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("webhook_tolerance_secs", DEFAULT_TOLERANCE_SECS as i64)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            webhook_secret: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            webhook_tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }
}
