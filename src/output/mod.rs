//! Scan output formatting
//!
//! - `plain` - streamed text blocks, optionally colored
//! - `json` - a single JSON array written once the walk completes

mod config;
mod json;
mod plain;

pub use config::OutputConfig;
pub use json::JsonFormatter;
pub use plain::{PlainFormatter, SEPARATOR_WIDTH};
