//! Holdings offered in the sell form's symbol dropdown.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::TfError;

/// Name of the per-option attribute carrying the available share count.
pub const AVAILABLE_SHARES_ATTR: &str = "data-available-shares";

/// One option of the holdings select.
///
/// `available_shares` is whatever the server rendered into the option's
/// attribute; it is displayed as-is and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingOption {
    pub symbol: Symbol,
    pub available_shares: Option<String>,
}

impl HoldingOption {
    pub fn new(symbol: Symbol, available_shares: impl Into<String>) -> Self {
        Self { symbol, available_shares: Some(available_shares.into()) }
    }

    /// Parse a `SYMBOL=COUNT` pair; `SYMBOL` alone yields an option without
    /// the attribute.
    pub fn parse_pair(s: &str) -> Result<Self, TfError> {
        match s.split_once('=') {
            Some((sym, count)) => Ok(Self::new(Symbol::new(sym)?, count.trim())),
            None => Ok(Self { symbol: Symbol::new(s)?, available_shares: None }),
        }
    }
}
