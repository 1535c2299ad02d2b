//! Configuration management for WebDriver-Events

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use tracing_subscriber::EnvFilter;

/// Wrapper configuration
///
/// Only affects how the interception layer reports itself; dispatch
/// semantics are identical for every configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label attached to every log event of one wrapped driver graph
    pub label: String,

    /// Log listener dispatch at debug level instead of trace
    pub trace_dispatch: bool,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: "webdriver".to_string(),
            trace_dispatch: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(label) = env::var("WEBDRIVER_EVENTS_LABEL") {
            config.label = label;
        }

        if let Ok(trace) = env::var("WEBDRIVER_EVENTS_TRACE_DISPATCH") {
            config.trace_dispatch = trace
                .parse()
                .map_err(|_| Error::configuration("Invalid WEBDRIVER_EVENTS_TRACE_DISPATCH"))?;
        }

        if let Ok(log_level) = env::var("WEBDRIVER_EVENTS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Install a global fmt subscriber; a second call is a no-op
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .map_err(|e| Error::configuration(format!("Invalid log level: {}", e)))?;

        // Someone else already owns the global subscriber; keep theirs.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        Ok(())
    }
}
