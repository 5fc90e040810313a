//! # Common Error Types
//!
//! Consolidated error handling for the CIK terminal.
//!
//! This module provides a centralized error type [`AppError`] for everything
//! that reaches the binary. Operation-level errors ([`TransferError`],
//! [`ChainError`], [`AmountError`]) carry the short user-facing message and
//! convert into `AppError` with `?`.
//!
//! ## Error Categories
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **Wallet**: Wallet/chain client failures (not connected, RPC rejection)
//! - **Validation**: Input validation errors (amount, address, handle)
//! - **Config**: Missing or malformed environment configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use cik_terminal::core::error::{AppError, Result};
//! use cik_terminal::utils::validation::validate_amount;
//!
//! fn amount_in_wei(input: &str) -> Result<String> {
//!     let value = validate_amount(input, 18)?;
//!     Ok(value.to_string())
//! }
//!
//! assert!(matches!(amount_in_wei("-1"), Err(AppError::Validation(_))));
//! ```
//!
//! [`TransferError`]: crate::services::transfer::TransferError
//! [`ChainError`]: crate::services::wallet::ChainError
//! [`AmountError`]: crate::utils::validation::AmountError

use thiserror::Error;

/// Application-wide error type.
///
/// ```rust
/// use cik_terminal::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let validation_err = AppError::Validation("Amount must be greater than 0".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(validation_err.to_string(), "Validation error: Amount must be greater than 0");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, 4xx/5xx statuses and malformed JSON bodies.
    #[error("API error: {0}")]
    Api(String),

    /// Wallet or chain client error.
    ///
    /// Used when no account is connected or the node rejects a request.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Input validation error (amount format, address or handle syntax).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<crate::utils::validation::AmountError> for AppError {
    fn from(err: crate::utils::validation::AmountError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<crate::services::wallet::ChainError> for AppError {
    fn from(err: crate::services::wallet::ChainError) -> Self {
        AppError::Wallet(err.normalized())
    }
}

impl From<crate::services::transfer::TransferError> for AppError {
    fn from(err: crate::services::transfer::TransferError) -> Self {
        use crate::services::transfer::TransferError;
        match err {
            TransferError::InvalidAmount(e) => AppError::Validation(e.to_string()),
            other => AppError::Wallet(other.to_string()),
        }
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
