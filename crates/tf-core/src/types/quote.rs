//! Quote request/response types.
//!
//! A successful `/quote` response is a flat JSON object with one entry per
//! display field plus a `price_diff_color` token. [`QuoteSnapshot::from_json`]
//! turns it into display text for each [`QuoteField`]; values may arrive as
//! JSON strings or numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::QuoteError;

/// Body of the quote request: `{"symbol": "AAPL"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub symbol: Symbol,
}

// ---------------------------------------------------------------------------
// Display fields
// ---------------------------------------------------------------------------

/// The display fields of the quote panel.
///
/// The discriminant doubles as the index into [`QuoteSnapshot`] and the
/// panel's field array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuoteField {
    Price = 0,
    PriceDiff = 1,
    PercentageChange = 2,
    CurrentTime = 3,
    Market = 4,
    BidPrice = 5,
    BidSize = 6,
    AskPrice = 7,
    AskSize = 8,
    DayHigh = 9,
    DayLow = 10,
    MarketCap = 11,
    Pe = 12,
    FiftyTwoWeekHigh = 13,
    FiftyTwoWeekLow = 14,
    Volume = 15,
    AverageVolume = 16,
}

impl QuoteField {
    pub const COUNT: usize = 17;

    /// All fields in panel order.
    pub const ALL: [QuoteField; Self::COUNT] = [
        Self::Price,
        Self::PriceDiff,
        Self::PercentageChange,
        Self::CurrentTime,
        Self::Market,
        Self::BidPrice,
        Self::BidSize,
        Self::AskPrice,
        Self::AskSize,
        Self::DayHigh,
        Self::DayLow,
        Self::MarketCap,
        Self::Pe,
        Self::FiftyTwoWeekHigh,
        Self::FiftyTwoWeekLow,
        Self::Volume,
        Self::AverageVolume,
    ];

    /// The two fields colorized with the server's color token.
    pub const COLORED: [QuoteField; 2] = [Self::PriceDiff, Self::PercentageChange];

    /// JSON key in the response, which is also the element id on the page.
    pub fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::PriceDiff => "price_diff",
            Self::PercentageChange => "percentage_change",
            Self::CurrentTime => "current_time",
            Self::Market => "market",
            Self::BidPrice => "bid_price",
            Self::BidSize => "bid_size",
            Self::AskPrice => "ask_price",
            Self::AskSize => "ask_size",
            Self::DayHigh => "day_high",
            Self::DayLow => "day_low",
            Self::MarketCap => "market_cap",
            Self::Pe => "pe",
            Self::FiftyTwoWeekHigh => "fifty_two_week_high",
            Self::FiftyTwoWeekLow => "fifty_two_week_low",
            Self::Volume => "volume",
            Self::AverageVolume => "average_volume",
        }
    }

    /// Human-readable label for renderers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::PriceDiff => "Change",
            Self::PercentageChange => "Change %",
            Self::CurrentTime => "As of",
            Self::Market => "Market",
            Self::BidPrice => "Bid",
            Self::BidSize => "Bid size",
            Self::AskPrice => "Ask",
            Self::AskSize => "Ask size",
            Self::DayHigh => "Day high",
            Self::DayLow => "Day low",
            Self::MarketCap => "Market cap",
            Self::Pe => "P/E",
            Self::FiftyTwoWeekHigh => "52w high",
            Self::FiftyTwoWeekLow => "52w low",
            Self::Volume => "Volume",
            Self::AverageVolume => "Avg volume",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Color token
// ---------------------------------------------------------------------------

/// Server-chosen color for the change fields (`"green"`, `"red"`, ...).
///
/// Passed through verbatim; the renderer decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Display text for every quote field plus the change color.
///
/// Only built from a response that carries every field, so applying it
/// always overwrites the whole panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSnapshot {
    texts: [String; QuoteField::COUNT],
    pub color: ColorToken,
}

impl QuoteSnapshot {
    pub const COLOR_KEY: &'static str = "price_diff_color";

    /// Build a snapshot from a success response body.
    ///
    /// Fails with [`QuoteError::MissingField`] on the first absent or `null`
    /// field, and [`QuoteError::Parse`] when a field is an array or object.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, QuoteError> {
        let obj = body
            .as_object()
            .ok_or_else(|| QuoteError::Parse("response is not a JSON object".into()))?;

        let mut texts: [String; QuoteField::COUNT] = Default::default();
        for field in QuoteField::ALL {
            let text = scalar_text(obj.get(field.key()), field.key())?;
            texts[field.index()] = match field {
                QuoteField::PercentageChange => format!("({text}%)"),
                _ => text,
            };
        }

        let color = scalar_text(obj.get(Self::COLOR_KEY), Self::COLOR_KEY)?;
        Ok(Self { texts, color: ColorToken(color) })
    }

    /// Display text for a field.
    #[inline]
    pub fn text(&self, field: QuoteField) -> &str {
        &self.texts[field.index()]
    }

    /// `(field, text)` pairs in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &str)> {
        QuoteField::ALL.into_iter().map(move |f| (f, self.text(f)))
    }
}

/// Text of a string/number/bool JSON value.
fn scalar_text(v: Option<&serde_json::Value>, key: &'static str) -> Result<String, QuoteError> {
    match v {
        None | Some(serde_json::Value::Null) => Err(QuoteError::MissingField(key)),
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(QuoteError::Parse(format!("field `{key}` is not a scalar"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> serde_json::Value {
        json!({
            "price": "172.35",
            "price_diff": "+1.20",
            "percentage_change": "0.70",
            "price_diff_color": "green",
            "current_time": "2024-05-01 15:59:59",
            "market": "Market open",
            "bid_price": "$172.30",
            "bid_size": 300,
            "ask_price": "$172.40",
            "ask_size": 200,
            "day_high": "$173.00",
            "day_low": "$170.10",
            "market_cap": "2.65T",
            "pe": 28.41,
            "fifty_two_week_high": "$199.62",
            "fifty_two_week_low": "$164.08",
            "volume": "52.10M",
            "average_volume": "58.33M"
        })
    }

    #[test]
    fn parses_full_response() {
        let snap = QuoteSnapshot::from_json(&full_body()).unwrap();
        assert_eq!(snap.text(QuoteField::Price), "172.35");
        assert_eq!(snap.text(QuoteField::PriceDiff), "+1.20");
        assert_eq!(snap.text(QuoteField::PercentageChange), "(0.70%)");
        assert_eq!(snap.text(QuoteField::BidSize), "300");
        assert_eq!(snap.text(QuoteField::Pe), "28.41");
        assert_eq!(snap.text(QuoteField::AverageVolume), "58.33M");
        assert_eq!(snap.color.as_str(), "green");
        assert_eq!(snap.iter().count(), QuoteField::COUNT);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("volume");
        assert_eq!(QuoteSnapshot::from_json(&body), Err(QuoteError::MissingField("volume")));
    }

    #[test]
    fn null_field_is_rejected() {
        let mut body = full_body();
        body["pe"] = serde_json::Value::Null;
        assert_eq!(QuoteSnapshot::from_json(&body), Err(QuoteError::MissingField("pe")));
    }

    #[test]
    fn missing_color_is_rejected() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("price_diff_color");
        assert_eq!(
            QuoteSnapshot::from_json(&body),
            Err(QuoteError::MissingField("price_diff_color"))
        );
    }

    #[test]
    fn nested_value_is_rejected() {
        let mut body = full_body();
        body["market"] = json!({ "open": true });
        assert!(matches!(QuoteSnapshot::from_json(&body), Err(QuoteError::Parse(_))));
    }

    #[test]
    fn non_object_body() {
        assert!(matches!(QuoteSnapshot::from_json(&json!([1, 2])), Err(QuoteError::Parse(_))));
    }

    #[test]
    fn field_table_is_consistent() {
        for (i, field) in QuoteField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
        assert_eq!(QuoteField::Pe.key(), "pe");
        assert_eq!(QuoteField::FiftyTwoWeekLow.to_string(), "fifty_two_week_low");
    }

    #[test]
    fn request_body_shape() {
        let req = QuoteRequest { symbol: Symbol::new("AAPL").unwrap() };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "symbol": "AAPL" }));
    }
}
