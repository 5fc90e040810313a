//! # CIK Transfer Terminal - Library Root
//!
//! Command-line terminal for sending the CIK ERC-20 token (or the chain's
//! native asset) on an EVM chain, to a raw address or to an `@handle`
//! registered with the CIK backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              cik-terminal (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  app::Terminal           - command interpreter         │
//! │  services::resolver      - address / @handle resolver  │
//! │  services::transfer      - transfer submitter          │
//! │  utils::validation       - amounts, addresses, handles │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (reqwest)               │ JSON-RPC (alloy provider)
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  CIK backend    │          │   EVM node (Base)       │
//! │  /resolve       │          │   eth_sendTransaction   │
//! │  /transfers     │          │   eth_call, receipts    │
//! │  /activity      │          │                         │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Terminal interpreter and scrollback log
//! - **core**: Configuration, error types and the service traits
//! - **debug**: File-based logging
//! - **services**: Backend API client, handle directory, resolver,
//!   transfer submitter and JSON-RPC wallet
//! - **utils**: Amount and recipient validation
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin cik-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use crate::app::{CommandLogEntry, LogKind, Terminal};
pub use crate::core::{AppConfig, AppError, Result};
