//! # Core Abstractions
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Capability traits (`HandleDirectory`, `TransferLogService`, `WalletClient`)
//! - **[`config`]**: Environment configuration and the supported-token table
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cik_terminal::core::{AppConfig, HandleDirectory};
//! use cik_terminal::services::api::ApiClient;
//!
//! let config = AppConfig::from_env().unwrap();
//! let directory: Arc<dyn HandleDirectory> = Arc::new(ApiClient::new(&config.api_base, &config.api_key));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::{AppConfig, TokenInfo};
pub use error::{AppError, Result};
pub use service::{HandleDirectory, TransferLogService, WalletClient};
