//! Quote panel refresh.
//!
//! [`QuoteRefresher::refresh`] posts `{"symbol": ...}` to the quote endpoint
//! and repaints every field of the panel from the response. Failures of any
//! kind are logged and leave the panel untouched:
//!
//! | Reply                              | Result                          |
//! |------------------------------------|---------------------------------|
//! | 2xx, complete body                 | all fields overwritten          |
//! | 2xx, body has `error`              | logged, no mutation             |
//! | 2xx, body missing a display field  | logged, no mutation             |
//! | non-2xx                            | `error` from body logged        |
//! | transport or JSON failure          | logged, no mutation             |
//!
//! Refreshes are not coordinated with each other. Each one takes a ticket from
//! a [`RequestSequence`] before dispatch and only the newest ticket may paint
//! the panel, so a slow response can never overwrite a newer one.

use std::sync::Arc;

use tf_core::error::QuoteError;
use tf_core::sequence::{RequestSequence, Ticket};
use tf_core::types::{ColorToken, QuoteField, QuoteRequest, QuoteSnapshot, Symbol};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{QuoteSource, RawReply};

// ---------------------------------------------------------------------------
// View-model
// ---------------------------------------------------------------------------

/// Something the refresher can paint quote fields onto.
pub trait QuoteView: Send {
    fn set_text(&mut self, field: QuoteField, text: &str);
    fn set_color(&mut self, field: QuoteField, color: &ColorToken);
}

/// One display element: its text and optional color style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayField {
    pub text: String,
    pub color: Option<ColorToken>,
}

/// In-memory quote panel, one [`DisplayField`] per [`QuoteField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePanel {
    fields: [DisplayField; QuoteField::COUNT],
}

impl QuotePanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn field(&self, field: QuoteField) -> &DisplayField {
        &self.fields[field.index()]
    }

    #[inline]
    pub fn text(&self, field: QuoteField) -> &str {
        &self.fields[field.index()].text
    }

    /// `(field, element)` pairs in panel order.
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &DisplayField)> {
        QuoteField::ALL.into_iter().map(move |f| (f, self.field(f)))
    }
}

impl QuoteView for QuotePanel {
    fn set_text(&mut self, field: QuoteField, text: &str) {
        self.fields[field.index()].text = text.to_string();
    }

    fn set_color(&mut self, field: QuoteField, color: &ColorToken) {
        self.fields[field.index()].color = Some(color.clone());
    }
}

/// Overwrite every field of `view` and color the change fields.
pub fn apply_snapshot<V: QuoteView + ?Sized>(view: &mut V, snapshot: &QuoteSnapshot) {
    for (field, text) in snapshot.iter() {
        view.set_text(field, text);
    }
    for field in QuoteField::COLORED {
        view.set_color(field, &snapshot.color);
    }
}

// ---------------------------------------------------------------------------
// Reply interpretation
// ---------------------------------------------------------------------------

/// Turn a raw reply into a snapshot, or the reason it cannot be shown.
pub fn interpret_reply(reply: &RawReply) -> Result<QuoteSnapshot, QuoteError> {
    let body: Result<serde_json::Value, _> = serde_json::from_str(&reply.body);

    if !reply.is_success() {
        let body = body.map_err(|e| {
            QuoteError::Parse(format!("status {} with unreadable body: {e}", reply.status))
        })?;
        let message = error_message(&body).unwrap_or_else(|| "no error message".to_string());
        return Err(QuoteError::Status { status: reply.status, message });
    }

    let body = body.map_err(|e| QuoteError::Parse(e.to_string()))?;
    if let Some(message) = error_message(&body) {
        return Err(QuoteError::Application(message));
    }
    QuoteSnapshot::from_json(&body)
}

/// The `error` field, if present and non-empty.
fn error_message(body: &serde_json::Value) -> Option<String> {
    match body.get("error")? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Refresher
// ---------------------------------------------------------------------------

/// What happened to one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The panel now shows this response.
    Applied(Ticket),
    /// A newer refresh was dispatched first; the response was dropped.
    Stale(Ticket),
    /// Nothing was shown; the error has been logged.
    Failed(QuoteError),
}

/// Fetches quotes and paints them onto a shared panel.
pub struct QuoteRefresher<S, V> {
    source: S,
    panel: Arc<Mutex<V>>,
    sequence: RequestSequence,
}

impl<S: QuoteSource, V: QuoteView> QuoteRefresher<S, V> {
    pub fn new(source: S, panel: Arc<Mutex<V>>) -> Self {
        Self { source, panel, sequence: RequestSequence::new() }
    }

    /// The panel this refresher paints.
    pub fn panel(&self) -> &Arc<Mutex<V>> {
        &self.panel
    }

    /// Refresh the panel for `symbol`.
    ///
    /// Never returns an error: failures are logged and reported through
    /// [`RefreshOutcome::Failed`].
    pub async fn refresh(&self, symbol: &Symbol) -> RefreshOutcome {
        let ticket = self.sequence.issue();
        self.refresh_with(ticket, symbol).await
    }

    /// Refresh under a ticket issued at dispatch time.
    async fn refresh_with(&self, ticket: Ticket, symbol: &Symbol) -> RefreshOutcome {
        let request = QuoteRequest { symbol: symbol.clone() };
        debug!("[quote] #{} sending payload for {symbol}", ticket.get());

        let snapshot = match self.source.fetch(&request).await {
            Ok(reply) => {
                debug!("[quote] #{} response status {}", ticket.get(), reply.status);
                interpret_reply(&reply)
            }
            Err(e) => Err(e),
        };

        let snapshot = match snapshot {
            Ok(s) => s,
            Err(e) => {
                error!("[quote] #{} error refreshing {symbol}: {e}", ticket.get());
                return RefreshOutcome::Failed(e);
            }
        };

        // Staleness check and write happen under one lock so a newer
        // refresh cannot land between them.
        let mut panel = self.panel.lock().await;
        if !self.sequence.is_current(ticket) {
            debug!(
                "[quote] #{} for {symbol} is stale (latest #{}), dropping",
                ticket.get(),
                self.sequence.last_issued()
            );
            return RefreshOutcome::Stale(ticket);
        }
        apply_snapshot(&mut *panel, &snapshot);
        drop(panel);

        if tracing::enabled!(tracing::Level::DEBUG) {
            let fields: Vec<String> =
                snapshot.iter().map(|(field, text)| format!("{field}={text}")).collect();
            debug!(
                "[quote] #{} updated information for {symbol}: {} color={}",
                ticket.get(),
                fields.join(" "),
                snapshot.color
            );
        }
        RefreshOutcome::Applied(ticket)
    }
}

impl<S, V> QuoteRefresher<S, V>
where
    S: QuoteSource + 'static,
    V: QuoteView + 'static,
{
    /// Fire-and-forget refresh on the tokio runtime.
    ///
    /// The ticket is issued here, before the task is spawned, so call order
    /// decides which refresh is newest.
    pub fn spawn_refresh(
        self: &Arc<Self>,
        symbol: Symbol,
    ) -> tokio::task::JoinHandle<RefreshOutcome> {
        let ticket = self.sequence.issue();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.refresh_with(ticket, &symbol).await })
    }
}
