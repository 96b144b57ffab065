//! Ticker symbol newtype.
//!
//! Symbols are sent to the server exactly as entered (minus surrounding
//! whitespace); the server is responsible for case normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TfError;

/// A trimmed, non-empty ticker symbol (e.g. `"AAPL"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl AsRef<str>) -> Result<Self, TfError> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TfError::Validation("must provide ticker symbol".into()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(TfError::Validation(format!("symbol {trimmed:?} contains whitespace")));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = TfError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Symbol::new(s)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl std::str::FromStr for Symbol {
    type Err = TfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}
