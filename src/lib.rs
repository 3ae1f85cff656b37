//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,types}`
//! and holds the binary's runtime pieces: environment config and the event
//! log.

pub mod config;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::AppConfig;
pub use event_log::{EventLog, RunStats};
