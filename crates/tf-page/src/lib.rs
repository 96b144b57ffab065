//! # tf-page
//!
//! The three page behaviors of the trading forms, written against a typed
//! view-model instead of global element lookups.
//!
//! ## Behaviors
//!
//! - [`order`]: validate a share count and submit a trade form to `/buy` or `/sell`
//! - [`quote`]: refresh the quote panel from the quote endpoint
//! - [`holdings`]: show the available-share hint for the selected holding
//!
//! ## Seams
//!
//! Network and user-facing side effects go through small traits so the
//! behaviors can run against any transport: [`QuoteSource`] fetches quotes,
//! [`FormSink`] posts forms, [`Alert`] shows blocking messages. `tf-http`
//! provides the reqwest implementations.

pub mod element;
pub mod holdings;
pub mod order;
pub mod quote;

use anyhow::Result;
use async_trait::async_trait;
use tf_core::error::QuoteError;
use tf_core::types::QuoteRequest;

/// Status and body of a quote response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a quote request and returns whatever came back.
///
/// Implementations return `Err` only when no response was received; non-2xx
/// statuses are a normal [`RawReply`].
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, request: &QuoteRequest) -> Result<RawReply, QuoteError>;
}

/// Posts a form's fields to its action path (a full page submission).
#[async_trait]
pub trait FormSink: Send + Sync {
    async fn submit(&self, action_path: &str, fields: &[(&str, &str)]) -> Result<()>;
}

/// Shows a blocking message to the user.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}
