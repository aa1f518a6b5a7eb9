//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BASE_URL="/app/"
//! export LISTEN="127.0.0.1:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - History base the pages are mounted under (default: `/`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `{BASE_URL}/static` (default: `static`)

use crate::domain::WebHistory;
use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw base URL as supplied by the deployment environment.
    /// Normalized by [`Config::history`].
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on non-UTF-8 values.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        let base_url = var_or("BASE_URL", "/")?;
        let listen_addr = var_or("LISTEN", "0.0.0.0:3000")?;
        let log_level = var_or("RUST_LOG", "info")?;
        let log_format = var_or("LOG_FORMAT", "text")?;
        let static_dir = var_or("STATIC_DIR", "static")?;

        Ok(Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not a valid history base
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        self.history().context("BASE_URL is invalid")?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Builds the history configuration from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RouteError::InvalidBase`] for a malformed base.
    pub fn history(&self) -> Result<WebHistory, crate::error::RouteError> {
        WebHistory::new(&self.base_url)
    }

    /// Whether JSON log output was requested.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Reads `key`, falling back to `default` when it is unset.
fn var_or(key: &str, default: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(anyhow::Error::new(e).context(format!("{key} is not valid Unicode"))),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is unreadable or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
