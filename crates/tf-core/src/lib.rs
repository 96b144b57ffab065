//! # tf-core
//!
//! Core crate for the tradeform behaviors, providing:
//!
//! - **Types** (`types`): symbols, order intents, quote snapshots, holdings
//! - **Configuration** (`config`): JSON config deserialization
//! - **Error types** (`error`): `TfError`, `SharesError`, `QuoteError` via thiserror
//! - **Request sequencing** (`sequence`): monotonic tickets for stale-response detection
//! - **Logging** (`logging`): tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod types;

// Re-export types at crate root for convenience.
pub use types::*;
