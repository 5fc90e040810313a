//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies exchanged with the CIK backend API.
//!
//! ## Module Organization
//!
//! - [`resolve`] - Handle resolution (`POST /resolve`)
//! - [`transfer`] - Transfer logging and activity (`POST /transfers`, `GET /activity`)
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case, matching the backend models
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Addresses and hashes**: `0x`-prefixed hex strings; the terminal parses them into typed values
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /resolve
//! Content-Type: application/json
//!
//! { "handle": "@adi" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "address": "0x0000000000000000000000000000000000000001" }
//! ```

pub mod resolve;
pub mod transfer;

pub use resolve::*;
pub use transfer::*;

use serde::{Deserialize, Serialize};

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}
