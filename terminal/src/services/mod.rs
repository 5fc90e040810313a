//! # Services Module
//!
//! External integrations and the asynchronous parts of the core.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/          - Backend HTTP client
//! │                   (handle lookup, transfer log, activity feed)
//! ├── directory.rs  - In-memory handle directory
//! ├── resolver.rs   - Address / @handle resolver, latest input wins
//! ├── transfer.rs   - Transfer submitter and status tracking
//! └── wallet.rs     - JSON-RPC wallet (node-managed account)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Terminal                            │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  HandleResolver  │       │ TransferSubmitter│        │
//! │  └────────┬─────────┘       └───┬──────────┬───┘        │
//! │           │ HandleDirectory     │ Wallet   │ TransferLog│
//! └───────────┼─────────────────────┼──────────┼────────────┘
//!             ▼                     ▼          ▼
//!        ApiClient             RpcWallet    ApiClient
//!        POST /resolve         JSON-RPC     POST /transfers
//! ```
//!
//! All collaborators sit behind the traits in [`crate::core::service`].

pub mod api;
pub mod directory;
pub mod resolver;
pub mod transfer;
pub mod wallet;

pub use api::ApiClient;
pub use directory::InMemoryDirectory;
pub use resolver::{resolve_recipient, HandleResolver, ResolvedAddress};
pub use transfer::{TransferError, TransferRequest, TransferSubmitter, TxStatus};
pub use wallet::{ChainError, RpcWallet, WalletStatus};
