//! Typed error definitions for the trading-form behaviors.
//!
//! Provides [`TfError`] for configuration and plumbing errors, [`SharesError`]
//! for share-count validation, and [`QuoteError`] for the quote refresh flow.
//! All variants implement `std::error::Error` via `thiserror`, so they integrate
//! with `anyhow::Result` at the application seams.

use thiserror::Error;

/// General errors for the tradeform system.
#[derive(Debug, Error)]
pub enum TfError {
    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),

    /// User input rejected before anything was sent.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Why a share-count input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharesError {
    #[error("share count is empty")]
    Empty,

    #[error("share count {0:?} is not a number")]
    NotANumber(String),

    #[error("share count {0:?} is not positive")]
    NotPositive(String),
}

/// Failures of a single quote refresh.
///
/// None of these reach the user; the refresher logs them and leaves the panel
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The server answered with a non-success status.
    #[error("quote request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the body carries an `error` field.
    #[error("quote endpoint reported: {0}")]
    Application(String),

    /// The request never produced a response.
    #[error("quote transport failure: {0}")]
    Transport(String),

    /// The body was not the JSON object we expect.
    #[error("quote response parse failure: {0}")]
    Parse(String),

    /// A display field was absent or `null`.
    #[error("quote response is missing field `{0}`")]
    MissingField(&'static str),
}
