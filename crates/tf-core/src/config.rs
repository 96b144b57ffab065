//! Configuration parsing for the tradeform tools.
//!
//! Everything is read from a single JSON config file. The top-level structure
//! holds the server the forms talk to and the logging settings.
//!
//! # Example config
//!
//! ```json
//! {
//!   "server": {
//!     "base_url": "http://127.0.0.1:5000",
//!     "quote_path": "/quote",
//!     "extra_headers": { "Cookie": "session=abc" }
//!   },
//!   "logging": { "level": "debug", "dir": "/tmp/log" }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::error::TfError;
use crate::types::OrderAction;

/// Top-level application config, deserialized from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// The trading web application serving `/buy`, `/sell` and `/quote`.
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the forms are posted to.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Scheme, host and port of the web application.
    pub base_url: String,

    #[serde(default = "default_buy_path")]
    pub buy_path: String,

    #[serde(default = "default_sell_path")]
    pub sell_path: String,

    #[serde(default = "default_quote_path")]
    pub quote_path: String,

    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra HTTP headers for every request (e.g. the session cookie).
    #[serde(default)]
    pub extra_headers: HashMap<String, String>,
}

impl ServerConfig {
    /// A config pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            buy_path: default_buy_path(),
            sell_path: default_sell_path(),
            quote_path: default_quote_path(),
            user_agent: default_user_agent(),
            extra_headers: HashMap::new(),
        }
    }

    /// Endpoint path for an order action.
    pub fn action_path(&self, action: OrderAction) -> &str {
        match action {
            OrderAction::Buy => &self.buy_path,
            OrderAction::Sell => &self.sell_path,
        }
    }

    /// Resolve a path against `base_url`.
    pub fn endpoint(&self, path: &str) -> Result<Url, TfError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| TfError::Config(format!("base_url {:?}: {e}", self.base_url)))?;
        base.join(path).map_err(|e| TfError::Config(format!("path {path:?}: {e}")))
    }

    /// Check that the base URL parses and every path is absolute.
    pub fn validate(&self) -> Result<(), TfError> {
        for path in [&self.buy_path, &self.sell_path, &self.quote_path] {
            if !path.starts_with('/') {
                return Err(TfError::Config(format!("endpoint path {path:?} must start with '/'")));
            }
            self.endpoint(path)?;
        }
        Ok(())
    }
}

/// Logging block.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Optional directory for daily-rotating log files.
    #[serde(default)]
    pub dir: Option<String>,

    /// Log file prefix.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level(), dir: None, file_prefix: default_file_prefix(), json: false }
    }
}

fn default_buy_path() -> String {
    "/buy".into()
}

fn default_sell_path() -> String {
    "/sell".into()
}

fn default_quote_path() -> String {
    "/quote".into()
}

fn default_user_agent() -> String {
    concat!("tradeform/", env!("CARGO_PKG_VERSION")).into()
}

fn default_level() -> String {
    "info".into()
}

fn default_file_prefix() -> String {
    "tradeform".into()
}

/// Parse and validate a JSON config document.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.server.validate()?;
    Ok(config)
}

/// Load, parse and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing config {}", path.display()))
}
