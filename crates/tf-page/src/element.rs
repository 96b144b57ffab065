//! Element ids of the trading pages.
//!
//! The view-model types carry these ids so renderers and logs can refer to
//! elements by the names the server templates use. Quote panel ids are the
//! JSON keys in [`QuoteField::key`](tf_core::types::QuoteField::key).

use tf_core::types::Symbol;

/// Single-form trade page.
pub const TRADE_FORM: &str = "tradeForm";
/// Share input of the single-form trade page.
pub const TRADE_FORM_SHARES: &str = "shares";
/// Holdings dropdown on the sell page.
pub const SYMBOL_SELECT: &str = "symbolSelect";
/// Hint text element.
pub const AVAILABLE_SHARES: &str = "available_shares";
/// Hint container toggled visible on selection.
pub const AVAILABLE_SHARES_CONTAINER: &str = "available_shares_container";

/// Per-row form in the holdings table (`form-<symbol>`).
pub fn form_id(symbol: &Symbol) -> String {
    format!("form-{symbol}")
}

/// Per-row share input in the holdings table (`shares-<symbol>`).
pub fn shares_input_id(symbol: &Symbol) -> String {
    format!("shares-{symbol}")
}
