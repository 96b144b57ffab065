//! Order form submission.
//!
//! One [`OrderSubmitter::set_action`] serves both page shapes: the per-row
//! forms of the holdings table ([`TradeForm::for_symbol`]) and the single
//! trade form ([`TradeForm::single`]). The share input is validated, the form
//! action is pointed at the buy or sell endpoint, and the form is posted once.
//! Invalid input raises an alert and nothing is sent.

use anyhow::Result;
use tf_core::error::SharesError;
use tf_core::types::{OrderAction, OrderIntent, Shares, Symbol};
use tracing::{info, warn};

use crate::element;
use crate::{Alert, FormSink};

/// Message shown when the share count fails validation.
pub const INVALID_SHARES_ALERT: &str = "Please enter a valid number of shares.";

// ---------------------------------------------------------------------------
// View-model
// ---------------------------------------------------------------------------

/// A text input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub id: String,
    pub value: String,
}

impl TextInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), value: String::new() }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A trade form: hidden symbol field, share input, and its action path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeForm {
    pub id: String,
    pub symbol: Symbol,
    pub shares: TextInput,
    /// Path the form posts to; unset until an action is chosen.
    pub action: Option<String>,
}

impl TradeForm {
    /// Row form of the holdings table (`form-<symbol>` / `shares-<symbol>`).
    pub fn for_symbol(symbol: Symbol) -> Self {
        Self {
            id: element::form_id(&symbol),
            shares: TextInput::new(element::shares_input_id(&symbol)),
            symbol,
            action: None,
        }
    }

    /// The single trade page form (`tradeForm`).
    pub fn single(symbol: Symbol) -> Self {
        Self {
            id: element::TRADE_FORM.into(),
            shares: TextInput::new(element::TRADE_FORM_SHARES),
            symbol,
            action: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Submitter
// ---------------------------------------------------------------------------

/// What a submit click led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was posted once.
    Submitted(OrderIntent),
    /// Validation failed; the user was alerted and nothing was sent.
    Blocked(SharesError),
}

/// Validates and submits trade forms through a [`FormSink`].
pub struct OrderSubmitter<S, A> {
    sink: S,
    alert: A,
    buy_path: String,
    sell_path: String,
}

impl<S: FormSink, A: Alert> OrderSubmitter<S, A> {
    /// Submitter posting to the default `/buy` and `/sell` paths.
    pub fn new(sink: S, alert: A) -> Self {
        Self {
            sink,
            alert,
            buy_path: OrderAction::Buy.default_path().into(),
            sell_path: OrderAction::Sell.default_path().into(),
        }
    }

    /// Override the endpoint paths.
    pub fn with_paths(mut self, buy_path: impl Into<String>, sell_path: impl Into<String>) -> Self {
        self.buy_path = buy_path.into();
        self.sell_path = sell_path.into();
        self
    }

    fn path_for(&self, action: OrderAction) -> &str {
        match action {
            OrderAction::Buy => &self.buy_path,
            OrderAction::Sell => &self.sell_path,
        }
    }

    /// Validate the form's share input, set its action, and submit it.
    ///
    /// Returns `Err` only when the submission itself fails.
    pub async fn set_action(
        &self,
        form: &mut TradeForm,
        action: OrderAction,
    ) -> Result<SubmitOutcome> {
        let shares = match Shares::parse(&form.shares.value) {
            Ok(s) => s,
            Err(e) => {
                warn!("[order] {} blocked: {e}", form.id);
                self.alert.alert(INVALID_SHARES_ALERT);
                return Ok(SubmitOutcome::Blocked(e));
            }
        };

        let intent = OrderIntent { symbol: form.symbol.clone(), shares, action };
        let path = self.path_for(action).to_string();
        form.action = Some(path.clone());

        info!("[order] {} submitting {intent} to {path}", form.id);
        self.sink.submit(&path, &intent.form_fields()).await?;
        Ok(SubmitOutcome::Submitted(intent))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    #[async_trait]
    impl FormSink for RecordingSink {
        async fn submit(&self, action_path: &str, fields: &[(&str, &str)]) -> Result<()> {
            let fields = fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
            self.posts.lock().unwrap().push((action_path.to_string(), fields));
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl FormSink for FailingSink {
        async fn submit(&self, _action_path: &str, _fields: &[(&str, &str)]) -> Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[derive(Default)]
    struct RecordingAlert {
        messages: Mutex<Vec<String>>,
    }

    impl Alert for RecordingAlert {
        fn alert(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn form(symbol: &str, shares: &str) -> TradeForm {
        let mut form = TradeForm::for_symbol(Symbol::new(symbol).unwrap());
        form.shares.set_value(shares);
        form
    }

    #[tokio::test]
    async fn invalid_inputs_are_blocked() {
        let submitter = OrderSubmitter::new(RecordingSink::default(), RecordingAlert::default());

        for raw in ["", "  ", "abc", "0", "-3", "NaN"] {
            let mut f = form("AAPL", raw);
            let outcome = submitter.set_action(&mut f, OrderAction::Buy).await.unwrap();
            assert!(matches!(outcome, SubmitOutcome::Blocked(_)), "{raw:?}");
            assert_eq!(f.action, None);
        }

        assert!(submitter.sink.posts.lock().unwrap().is_empty());
        let messages = submitter.alert.messages.lock().unwrap();
        assert_eq!(messages.len(), 6);
        assert!(messages.iter().all(|m| m == INVALID_SHARES_ALERT));
    }

    #[tokio::test]
    async fn buy_posts_once_to_buy() {
        let submitter = OrderSubmitter::new(RecordingSink::default(), RecordingAlert::default());

        let mut f = form("AAPL", "10");
        let outcome = submitter.set_action(&mut f, OrderAction::Buy).await.unwrap();

        let SubmitOutcome::Submitted(intent) = outcome else { panic!("expected submission") };
        assert_eq!(intent.action, OrderAction::Buy);
        assert_eq!(intent.shares.value(), 10.0);
        assert_eq!(f.action.as_deref(), Some("/buy"));

        let posts = submitter.sink.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "/buy");
        assert_eq!(
            posts[0].1,
            vec![
                ("symbol".to_string(), "AAPL".to_string()),
                ("shares".to_string(), "10".to_string())
            ]
        );
        assert!(submitter.alert.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sell_on_single_form() {
        let submitter = OrderSubmitter::new(RecordingSink::default(), RecordingAlert::default());

        let mut f = TradeForm::single(Symbol::new("MSFT").unwrap());
        f.shares.set_value(" 2.5 ");
        let outcome = submitter.set_action(&mut f, OrderAction::Sell).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
        assert_eq!(f.id, "tradeForm");
        assert_eq!(f.action.as_deref(), Some("/sell"));
        let posts = submitter.sink.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "/sell");
        assert_eq!(posts[0].1[1].1, "2.5");
    }

    #[tokio::test]
    async fn custom_paths() {
        let submitter = OrderSubmitter::new(RecordingSink::default(), RecordingAlert::default())
            .with_paths("/api/buy", "/api/sell");

        let mut f = form("TSLA", "1");
        submitter.set_action(&mut f, OrderAction::Sell).await.unwrap();
        assert_eq!(submitter.sink.posts.lock().unwrap()[0].0, "/api/sell");
    }

    #[tokio::test]
    async fn sink_failure_propagates() {
        let submitter = OrderSubmitter::new(FailingSink, RecordingAlert::default());

        let mut f = form("AAPL", "5");
        assert!(submitter.set_action(&mut f, OrderAction::Buy).await.is_err());
        assert!(submitter.alert.messages.lock().unwrap().is_empty());
    }
}
