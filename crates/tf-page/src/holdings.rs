//! Available-shares hint for the sell page.
//!
//! The sell form lists the user's holdings in a dropdown; each option carries
//! the holding's available share count. Selecting an option copies that count
//! into the hint and reveals it. On page load the hint is blanked and hidden
//! until the first selection, whatever the markup pre-selected.

use tf_core::types::{HoldingOption, Symbol};
use tracing::debug;

use crate::element;

/// The holdings dropdown (`symbolSelect`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoldingsSelect {
    options: Vec<HoldingOption>,
    selected: Option<usize>,
}

impl HoldingsSelect {
    pub fn new(options: Vec<HoldingOption>) -> Self {
        Self { options, selected: None }
    }

    pub fn options(&self) -> &[HoldingOption] {
        &self.options
    }

    /// Select the option for `symbol`. Returns `false` if there is none.
    pub fn select(&mut self, symbol: &Symbol) -> bool {
        match self.options.iter().position(|o| &o.symbol == symbol) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn selected_option(&self) -> Option<&HoldingOption> {
        self.selected.and_then(|i| self.options.get(i))
    }
}

/// Hint text (`available_shares`) and its container's visibility
/// (`available_shares_container`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintPanel {
    pub text: String,
    pub hidden: bool,
}

impl HintPanel {
    /// Hint as rendered by the server, before any script ran.
    pub fn new(text: impl Into<String>, hidden: bool) -> Self {
        Self { text: text.into(), hidden }
    }
}

impl Default for HintPanel {
    fn default() -> Self {
        Self::new("", true)
    }
}

/// Page load: blank the hint and hide its container.
pub fn on_page_load(hint: &mut HintPanel) {
    hint.text.clear();
    hint.hidden = true;
    debug!(
        "[hint] {} cleared, {} hidden",
        element::AVAILABLE_SHARES,
        element::AVAILABLE_SHARES_CONTAINER
    );
}

/// Selection change: show the selected holding's available shares.
///
/// An option without the attribute shows an empty hint. With nothing
/// selected the hint is blanked and stays hidden.
pub fn on_change(select: &HoldingsSelect, hint: &mut HintPanel) {
    let Some(option) = select.selected_option() else {
        on_page_load(hint);
        return;
    };
    hint.text = option.available_shares.clone().unwrap_or_default();
    hint.hidden = false;
    debug!(
        "[hint] {} selected {}: {:?} available",
        element::SYMBOL_SELECT,
        option.symbol,
        hint.text
    );
}
