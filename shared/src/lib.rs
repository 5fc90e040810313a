//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CIK terminal and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::resolve`]**: Handle → address lookup
//!   - **[`dto::transfer`]**: Transfer logging and the activity feed
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format `0x` addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! - Field names use **snake_case**, as the backend models do
//! - Optional fields are omitted from JSON when `None`
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::resolve::{ResolveRequest, ResolveResponse};
//!
//! let body = serde_json::to_string(&ResolveRequest { handle: "@adi".to_string() }).unwrap();
//! assert_eq!(body, r#"{"handle":"@adi"}"#);
//!
//! let reply: ResolveResponse = serde_json::from_str(r#"{"address":null}"#).unwrap();
//! assert!(reply.address.is_none());
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
