//! Plain-text rendering of the view-models for the terminal.

use std::fmt::Write;

use tf_core::types::{AVAILABLE_SHARES_ATTR, ColorToken, Symbol};
use tf_page::element;
use tf_page::holdings::{HintPanel, HoldingsSelect};
use tf_page::quote::QuotePanel;

const RESET: &str = "\x1b[0m";

/// ANSI escape for the server's color tokens we know; others render plain.
fn ansi(color: &ColorToken) -> Option<&'static str> {
    match color.as_str() {
        "green" => Some("\x1b[32m"),
        "red" => Some("\x1b[31m"),
        _ => None,
    }
}

pub fn quote_panel(symbol: &Symbol, panel: &QuotePanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{symbol}");
    for (field, el) in panel.iter() {
        let _ = match el.color.as_ref().and_then(ansi) {
            Some(code) => writeln!(out, "  {:<12} {code}{}{RESET}", field.label(), el.text),
            None => writeln!(out, "  {:<12} {}", field.label(), el.text),
        };
    }
    out
}

pub fn hint(select: &HoldingsSelect, hint: &HintPanel) -> String {
    let mut out = String::new();
    let selected = select.selected_option().map(|o| o.symbol.as_str()).unwrap_or("-");
    let _ = writeln!(out, "{}: {selected}", element::SYMBOL_SELECT);
    for option in select.options() {
        let _ = match &option.available_shares {
            Some(count) => writeln!(out, "  {} {AVAILABLE_SHARES_ATTR}={count}", option.symbol),
            None => writeln!(out, "  {}", option.symbol),
        };
    }
    if hint.hidden {
        let _ = writeln!(out, "{}: hidden", element::AVAILABLE_SHARES_CONTAINER);
    } else {
        let _ = writeln!(out, "{}: {}", element::AVAILABLE_SHARES, hint.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use tf_core::types::{HoldingOption, QuoteField};
    use tf_page::quote::QuoteView;

    use super::*;

    #[test]
    fn colors_known_tokens() {
        let mut panel = QuotePanel::new();
        panel.set_text(QuoteField::Price, "172.35");
        panel.set_text(QuoteField::PriceDiff, "+1.20");
        panel.set_color(QuoteField::PriceDiff, &ColorToken::new("green"));

        let text = quote_panel(&Symbol::new("AAPL").unwrap(), &panel);
        assert!(text.starts_with("AAPL\n"));
        assert!(text.contains("Price        172.35\n"));
        assert!(text.contains("\x1b[32m+1.20\x1b[0m"));
    }

    #[test]
    fn unknown_color_is_plain() {
        let mut panel = QuotePanel::new();
        panel.set_text(QuoteField::PriceDiff, "0.00");
        panel.set_color(QuoteField::PriceDiff, &ColorToken::new("gray"));
        let text = quote_panel(&Symbol::new("X").unwrap(), &panel);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn hidden_hint() {
        let select = HoldingsSelect::new(vec![
            HoldingOption::new(Symbol::new("AAPL").unwrap(), "150"),
            HoldingOption { symbol: Symbol::new("MSFT").unwrap(), available_shares: None },
        ]);
        let text = hint(&select, &HintPanel::default());
        assert_eq!(
            text,
            "symbolSelect: -\n  AAPL data-available-shares=150\n  MSFT\n\
             available_shares_container: hidden\n"
        );
    }

    #[test]
    fn visible_hint() {
        let mut select =
            HoldingsSelect::new(vec![HoldingOption::new(Symbol::new("AAPL").unwrap(), "150")]);
        select.select(&Symbol::new("AAPL").unwrap());
        let text = hint(&select, &HintPanel::new("150", false));
        assert_eq!(
            text,
            "symbolSelect: AAPL\n  AAPL data-available-shares=150\navailable_shares: 150\n"
        );
    }
}
