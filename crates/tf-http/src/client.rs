//! Shared HTTP client.

use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tf_core::config::ServerConfig;

/// A `reqwest::Client` bound to one trading web application.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WebClient {
    http: reqwest::Client,
    config: ServerConfig,
}

impl WebClient {
    /// Build a client from the server config.
    ///
    /// No request timeout is set; requests resolve or fail according to the
    /// transport's own defaults.
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .with_context(|| format!("invalid header name {name:?}"))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("invalid value for header {name}"))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;

        Ok(Self { http, config })
    }

    #[inline]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    #[inline]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Absolute URL for a path on the web application.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.config.endpoint(path)?)
    }
}
