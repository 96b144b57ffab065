//! # tf-runner
//!
//! Command-line driver for the trading form behaviors.
//!
//! Loads a JSON configuration file, wires the reqwest transports into the
//! page behaviors, and runs one interaction per invocation.
//!
//! # Usage
//!
//! ```bash
//! tf-runner config.json quote AAPL
//! tf-runner config.json buy AAPL 10
//! tf-runner config.json sell AAPL 5 --row
//! tf-runner config.json hint --holding AAPL=150 --holding MSFT=20 --select AAPL
//! ```

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tf_core::config::AppConfig;
use tf_core::types::{HoldingOption, OrderAction, Symbol};
use tf_http::{HttpFormSink, HttpQuoteSource, WebClient};
use tf_page::Alert;
use tf_page::holdings::{self, HintPanel, HoldingsSelect};
use tf_page::order::{OrderSubmitter, SubmitOutcome, TradeForm};
use tf_page::quote::{QuotePanel, QuoteRefresher, RefreshOutcome};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Trading form behaviors from the command line.
#[derive(Parser)]
#[command(name = "tf-runner", about = "Trading form behaviors from the command line")]
struct Cli {
    /// Configuration file path (JSON).
    config: PathBuf,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log directory override for file output.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh the quote panel. Several symbols are dispatched concurrently;
    /// only the last one dispatched can land on the panel.
    Quote {
        #[arg(required = true)]
        symbols: Vec<Symbol>,
    },
    /// Submit a buy order form.
    Buy(OrderArgs),
    /// Submit a sell order form.
    Sell(OrderArgs),
    /// Show the available-shares hint of the sell page.
    Hint {
        /// Holding as SYMBOL=SHARES (repeatable).
        #[arg(long = "holding", value_parser = HoldingOption::parse_pair)]
        holdings: Vec<HoldingOption>,

        /// Symbol to select after page load.
        #[arg(long)]
        select: Option<Symbol>,
    },
}

#[derive(Args)]
struct OrderArgs {
    symbol: Symbol,

    /// Share count, as typed into the form.
    shares: String,

    /// Use the holdings-table row form instead of the trade page form.
    #[arg(long)]
    row: bool,
}

/// Alerts go to stderr.
struct ConsoleAlert;

impl Alert for ConsoleAlert {
    fn alert(&self, message: &str) {
        warn!("[alert] {message}");
        eprintln!("alert: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let mut config = tf_core::config::load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.logging.dir = Some(dir);
    }

    // 2. Initialize logging
    tf_core::logging::init_logging(&config.logging);
    info!("tf-runner starting, config={}, server={}", cli.config.display(), config.server.base_url);

    // 3. Run the interaction
    match cli.command {
        Command::Quote { symbols } => run_quote(&config, symbols).await,
        Command::Buy(args) => run_order(&config, OrderAction::Buy, args).await,
        Command::Sell(args) => run_order(&config, OrderAction::Sell, args).await,
        Command::Hint { holdings, select } => {
            run_hint(holdings, select);
            Ok(())
        }
    }
}

async fn run_quote(config: &AppConfig, symbols: Vec<Symbol>) -> Result<()> {
    let client = WebClient::new(config.server.clone())?;
    let panel = Arc::new(Mutex::new(QuotePanel::new()));
    let refresher = Arc::new(QuoteRefresher::new(HttpQuoteSource::new(client), Arc::clone(&panel)));

    let handles: Vec<_> = symbols
        .into_iter()
        .map(|s| (s.clone(), refresher.spawn_refresh(s)))
        .collect();

    let mut shown = None;
    for (symbol, handle) in handles {
        match handle.await? {
            RefreshOutcome::Applied(ticket) => {
                info!("[quote] {symbol} applied (#{})", ticket.get());
                shown = Some(symbol);
            }
            RefreshOutcome::Stale(ticket) => {
                info!("[quote] {symbol} superseded (#{})", ticket.get())
            }
            RefreshOutcome::Failed(e) => error!("[quote] {symbol} not refreshed: {e}"),
        }
    }

    match shown {
        Some(symbol) => print!("{}", render::quote_panel(&symbol, &*panel.lock().await)),
        None => println!("quote panel unchanged"),
    }
    Ok(())
}

async fn run_order(config: &AppConfig, action: OrderAction, args: OrderArgs) -> Result<()> {
    let client = WebClient::new(config.server.clone())?;
    let submitter = OrderSubmitter::new(HttpFormSink::new(client), ConsoleAlert)
        .with_paths(
            config.server.action_path(OrderAction::Buy),
            config.server.action_path(OrderAction::Sell),
        );

    let mut form = if args.row {
        TradeForm::for_symbol(args.symbol)
    } else {
        TradeForm::single(args.symbol)
    };
    form.shares.set_value(args.shares);

    match submitter.set_action(&mut form, action).await? {
        SubmitOutcome::Submitted(intent) => println!("submitted: {intent}"),
        SubmitOutcome::Blocked(reason) => println!("not submitted: {reason}"),
    }
    Ok(())
}

fn run_hint(options: Vec<HoldingOption>, select: Option<Symbol>) {
    let mut symbol_select = HoldingsSelect::new(options);
    let mut hint = HintPanel::new("", false);
    holdings::on_page_load(&mut hint);

    if let Some(symbol) = select {
        if symbol_select.select(&symbol) {
            holdings::on_change(&symbol_select, &mut hint);
        } else {
            warn!("[hint] no holding for {symbol}");
        }
    }

    print!("{}", render::hint(&symbol_select, &hint));
}
