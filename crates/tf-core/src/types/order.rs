//! Order-related types: the buy/sell action, a validated share count, and the
//! order intent assembled on each submit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::SharesError;

// ---------------------------------------------------------------------------
// Order action
// ---------------------------------------------------------------------------

/// Which side of the trade the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Buy,
    Sell,
}

impl OrderAction {
    /// Default endpoint path the order form is posted to.
    pub fn default_path(self) -> &'static str {
        match self {
            Self::Buy => "/buy",
            Self::Sell => "/sell",
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for OrderAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(format!("unknown order action {other:?}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Share count
// ---------------------------------------------------------------------------

/// A share count that passed client-side validation.
///
/// Keeps the text the user typed: that is what the form submits, the server
/// does its own integer check.
#[derive(Debug, Clone, PartialEq)]
pub struct Shares {
    text: String,
    value: f64,
}

impl Shares {
    /// Validate raw input text.
    ///
    /// Rejects blank input, anything that is not a finite number, and numbers
    /// `<= 0`. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, SharesError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SharesError::Empty);
        }
        let value: f64 =
            fast_float2::parse(text).map_err(|_| SharesError::NotANumber(text.to_string()))?;
        if !value.is_finite() {
            return Err(SharesError::NotANumber(text.to_string()));
        }
        if value <= 0.0 {
            return Err(SharesError::NotPositive(text.to_string()));
        }
        Ok(Self { text: text.to_string(), value })
    }

    /// The validated input text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ---------------------------------------------------------------------------
// Order intent
// ---------------------------------------------------------------------------

/// What the user asked for on one submit click. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderIntent {
    pub symbol: Symbol,
    pub shares: Shares,
    pub action: OrderAction,
}

impl OrderIntent {
    /// Form fields in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("symbol", self.symbol.as_str()), ("shares", self.shares.as_str())]
    }
}

impl fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.action, self.shares, self.symbol)
    }
}
