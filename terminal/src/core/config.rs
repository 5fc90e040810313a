//! # Application Configuration
//!
//! Configuration is read once at startup from environment variables (a `.env`
//! file is loaded first by the binary). Values are only checked for presence
//! and parseability.
//!
//! | Variable | Default |
//! |---|---|
//! | `CIK_CHAIN_ID` | `8453` |
//! | `CIK_RPC_URL` | `https://mainnet.base.org` |
//! | `CIK_TOKEN_ADDRESS` | unset (token row omitted) |
//! | `CIK_TOKEN_DECIMALS` | `18` |
//! | `CIK_TOKEN_SYMBOL` | `CIK` |
//! | `CIK_API_BASE` | `http://127.0.0.1:8000` |
//! | `CIK_API_KEY` | empty |
//! | `CIK_WALLET_ACCOUNT` | unset (first node account) |
//! | `CIK_EXPLORER_URL` | `https://basescan.org` |
//! | `CIK_CONFIRM_ATTEMPTS` | `30` (`0` skips confirmation) |
//! | `CIK_CONFIRM_INTERVAL_MS` | `2000` |
//! | `CIK_DEMO_DIRECTORY` | `false` (resolve handles through the backend) |

use std::time::Duration;

use alloy_primitives::Address;
use lib_utils::envs::{get_env_opt, get_env_or, get_env_parse_or};

use super::error::{AppError, Result};
use crate::utils::validation::parse_address;

pub const DEFAULT_CHAIN_ID: u64 = shared::DEFAULT_CHAIN_ID;
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_EXPLORER_URL: &str = "https://basescan.org";
pub const DEFAULT_CONFIRM_ATTEMPTS: usize = 30;
pub const DEFAULT_CONFIRM_INTERVAL_MS: u64 = 2000;

/// A token the terminal can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    /// `None` for the chain's native asset
    pub address: Option<Address>,
}

impl TokenInfo {
    /// The chain's native asset (18 decimals, no contract).
    pub fn native() -> Self {
        Self {
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            decimals: 18,
            address: None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.address.is_none()
    }

    /// `Christ is King (CIK)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub token_address: Option<Address>,
    pub token_decimals: u8,
    pub token_symbol: String,
    pub api_base: String,
    pub api_key: String,
    /// Sender account; when unset the node's first account is used
    pub wallet_account: Option<Address>,
    pub explorer_url: String,
    /// Receipt polls after a submission; `0` disables confirmation tracking
    pub confirm_attempts: usize,
    pub confirm_interval: Duration,
    /// Resolve handles from the built-in demo book instead of the backend
    pub demo_directory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            token_address: None,
            token_decimals: 18,
            token_symbol: "CIK".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            wallet_account: None,
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            confirm_attempts: DEFAULT_CONFIRM_ATTEMPTS,
            confirm_interval: Duration::from_millis(DEFAULT_CONFIRM_INTERVAL_MS),
            demo_directory: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            chain_id: get_env_parse_or("CIK_CHAIN_ID", defaults.chain_id)?,
            rpc_url: get_env_or("CIK_RPC_URL", &defaults.rpc_url),
            token_address: env_address("CIK_TOKEN_ADDRESS")?,
            token_decimals: get_env_parse_or("CIK_TOKEN_DECIMALS", defaults.token_decimals)?,
            token_symbol: get_env_or("CIK_TOKEN_SYMBOL", &defaults.token_symbol),
            api_base: get_env_or("CIK_API_BASE", &defaults.api_base),
            api_key: get_env_or("CIK_API_KEY", ""),
            wallet_account: env_address("CIK_WALLET_ACCOUNT")?,
            explorer_url: get_env_or("CIK_EXPLORER_URL", &defaults.explorer_url),
            confirm_attempts: get_env_parse_or("CIK_CONFIRM_ATTEMPTS", defaults.confirm_attempts)?,
            confirm_interval: Duration::from_millis(get_env_parse_or(
                "CIK_CONFIRM_INTERVAL_MS",
                DEFAULT_CONFIRM_INTERVAL_MS,
            )?),
            demo_directory: get_env_parse_or("CIK_DEMO_DIRECTORY", defaults.demo_directory)?,
        })
    }

    /// Supported tokens: the configured token (when it has an address) followed by the native asset.
    pub fn tokens(&self) -> Vec<TokenInfo> {
        let mut tokens = Vec::with_capacity(2);
        if let Some(address) = self.token_address.filter(|a| !a.is_zero()) {
            tokens.push(TokenInfo {
                symbol: self.token_symbol.clone(),
                name: "Christ is King".to_string(),
                decimals: self.token_decimals,
                address: Some(address),
            });
        }
        tokens.push(TokenInfo::native());
        tokens
    }

    /// Startup notice for a token symbol that cannot be sent because its
    /// contract address is missing.
    pub fn token_warning(&self) -> Option<String> {
        if self.token_address.is_some_and(|a| !a.is_zero()) {
            return None;
        }
        Some(format!(
            "CIK_TOKEN_ADDRESS is not set: {} transfers are unavailable, only ETH can be sent",
            self.token_symbol
        ))
    }

    /// Explorer link for a transaction hash.
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}

fn env_address(name: &'static str) -> Result<Option<Address>> {
    match get_env_opt(name) {
        Some(raw) => parse_address(&raw)
            .map(Some)
            .ok_or_else(|| AppError::Config(format!("{name} must be a 0x-prefixed 20-byte address"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_without_contract_is_native_only() {
        let config = AppConfig::default();
        let tokens = config.tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol, "ETH");
        assert!(tokens[0].is_native());
    }

    #[test]
    fn test_tokens_with_contract() {
        let config = AppConfig {
            token_address: parse_address("0x00000000000000000000000000000000000000c1"),
            token_decimals: 6,
            ..AppConfig::default()
        };
        let tokens = config.tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].symbol, "CIK");
        assert_eq!(tokens[0].decimals, 6);
        assert!(!tokens[0].is_native());
        assert_eq!(tokens[1].symbol, "ETH");
    }

    #[test]
    fn test_zero_token_address_treated_as_native() {
        let config = AppConfig {
            token_address: Some(Address::ZERO),
            ..AppConfig::default()
        };
        assert_eq!(config.tokens().len(), 1);
    }

    #[test]
    fn test_missing_token_contract_is_reported() {
        let warning = AppConfig::default().token_warning().unwrap();
        assert!(warning.starts_with("CIK_TOKEN_ADDRESS is not set: CIK transfers are unavailable"));

        let config = AppConfig {
            token_address: parse_address("0x00000000000000000000000000000000000000c1"),
            ..AppConfig::default()
        };
        assert_eq!(config.token_warning(), None);
        assert_eq!(config.tokens()[0].label(), "Christ is King (CIK)");
        assert_eq!(config.tokens()[1].label(), "Ethereum (ETH)");
    }

    #[test]
    fn test_tx_url() {
        let config = AppConfig {
            explorer_url: "https://sepolia.basescan.org/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.tx_url("0xabc"), "https://sepolia.basescan.org/tx/0xabc");
    }
}
