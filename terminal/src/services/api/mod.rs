//! # Backend API Client Module
//!
//! HTTP client for the CIK backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct and trait implementations
//! ├── directory.rs  - Handle resolution (POST /resolve)
//! └── transfers.rs  - Transfer log and activity feed (POST /transfers, GET /activity)
//! ```

pub mod client;
pub mod directory;
pub mod transfers;

pub use client::ApiClient;
pub use directory::resolve_handle;
pub use transfers::{fetch_activity, log_transfer};
