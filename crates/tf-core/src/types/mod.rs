//! Core data types: symbols, order intents, quote snapshots and holdings.
//!
//! Every value here is transient. It is built from user input or a server
//! response for one interaction and dropped afterwards.

pub mod holding;
pub mod order;
pub mod quote;
pub mod symbol;

pub use holding::*;
pub use order::*;
pub use quote::*;
pub use symbol::*;
