//! # Logging
//!
//! File-based structured logging for the terminal.
//!
//! Logs go to a daily-rotated file (`logs/cik-terminal.log` by default) so
//! they never interleave with REPL output.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `cik_terminal=debug,info`)
//! - `CIK_LOG_DIR`: Log directory (default: `logs`)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
