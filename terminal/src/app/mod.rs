//! # Application Module
//!
//! The command-line terminal: parsed commands, the scrollback log and the
//! interpreter that drives the services.
//!
//! ```text
//! app/
//! ├── state.rs     - Command grammar and log entry types
//! └── terminal.rs  - Terminal interpreter (help, clear, balance, send)
//! ```

pub mod state;
pub mod terminal;

pub use state::{Command, CommandLogEntry, LogKind};
pub use terminal::Terminal;
