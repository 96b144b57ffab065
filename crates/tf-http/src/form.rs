//! Trade form transport.
//!
//! A form submission is a full-page POST: the server answers with a redirect
//! (followed) or an error page. Only the status matters here.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tf_page::FormSink;
use tracing::{info, warn};

use crate::client::WebClient;

/// Posts form fields, URL-encoded, to the form's action path.
#[derive(Debug, Clone)]
pub struct HttpFormSink {
    client: WebClient,
}

impl HttpFormSink {
    pub fn new(client: WebClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn submit(&self, action_path: &str, fields: &[(&str, &str)]) -> Result<()> {
        let url = self.client.url(action_path)?;

        let resp = self
            .client
            .http()
            .post(url.clone())
            .form(fields)
            .send()
            .await
            .with_context(|| format!("form submission to {url} failed"))?;

        let status = resp.status();
        if let Err(e) = resp.error_for_status_ref() {
            warn!("[http] form submission to {url} rejected: {status}");
            return Err(e).context("form submission HTTP error");
        }

        info!("[http] form submitted to {url} -> {status}");
        Ok(())
    }
}
