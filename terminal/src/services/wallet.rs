//! # Wallet Service
//!
//! JSON-RPC wallet backed by a node that manages its own accounts
//! (a local dev node, or a signer proxy in front of a remote one).
//!
//! ## Features
//! - Connect to a configured account or the node's first account
//! - Chain id check on connect
//! - Native transfers and ERC-20 `transfer(address,uint256)` via `eth_sendTransaction`
//! - Native and token balance queries
//! - Receipt status polling
//!
//! Signing happens on the node side; nothing here touches private keys.

use std::fmt;

use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportError;
use alloy_primitives::{Address, TxHash, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::service::WalletClient;

sol! {
    /// The slice of the ERC-20 interface the terminal needs
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Error reported by a wallet or chain client.
///
/// Mirrors what wallet libraries hand back: an optional short, human-friendly
/// message and the raw message underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainError {
    pub short_message: Option<String>,
    pub message: String,
}

impl ChainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            short_message: None,
            message: message.into(),
        }
    }

    pub fn with_short(short_message: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            short_message: Some(short_message.into()),
            message: message.into(),
        }
    }

    /// The message shown to users: the short message, else the raw message,
    /// else "Transfer failed".
    pub fn normalized(&self) -> String {
        self.short_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or_else(|| Some(self.message.trim()).filter(|m| !m.is_empty()))
            .unwrap_or("Transfer failed")
            .to_string()
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl std::error::Error for ChainError {}

impl From<TransportError> for ChainError {
    /// Node error responses keep their message as the short form; transport
    /// failures only carry the raw text.
    fn from(err: TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => {
                tracing::debug!(code = payload.code, message = %payload.message, "RPC error");
                ChainError::with_short(
                    payload.message.to_string(),
                    format!("RPC error {}: {}", payload.code, payload.message),
                )
            }
            None => {
                tracing::error!(error = %err, "RPC transport error");
                ChainError::new(format!("Network error: {}", err))
            }
        }
    }
}

/// Wallet connection status
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connecting in progress
    Connecting,
    /// Connected with wallet address
    Connected(Address),
    /// Error state with message
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            WalletStatus::Connected(addr) => Some(*addr),
            _ => None,
        }
    }
}

/// Wallet that delegates account management and signing to a JSON-RPC node.
pub struct RpcWallet {
    provider: DynProvider,
    rpc_url: String,
    chain_id: u64,
    preferred_account: Option<Address>,
    status: RwLock<WalletStatus>,
}

impl RpcWallet {
    /// Create a disconnected wallet for `rpc_url`.
    ///
    /// `account` pins the sender; otherwise [`connect`](Self::connect) picks the
    /// node's first account. Gas, nonce and signing are left to the node, so the
    /// provider runs without fillers.
    pub fn new(rpc_url: &str, chain_id: u64, account: Option<Address>) -> Result<Self, ChainError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ChainError::with_short("Invalid RPC URL", format!("Invalid RPC URL {rpc_url}: {e}")))?;

        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url)
            .erased();

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            chain_id,
            preferred_account: account,
            status: RwLock::new(WalletStatus::Disconnected),
        })
    }

    pub fn status(&self) -> WalletStatus {
        self.status.read().clone()
    }

    /// Verify the chain id and select the sending account.
    #[tracing::instrument(skip(self), fields(rpc_url = %self.rpc_url))]
    pub async fn connect(&self) -> Result<Address, ChainError> {
        *self.status.write() = WalletStatus::Connecting;

        match self.try_connect().await {
            Ok(account) => {
                tracing::info!(account = %account, chain_id = self.chain_id, "Wallet connected");
                *self.status.write() = WalletStatus::Connected(account);
                Ok(account)
            }
            Err(e) => {
                tracing::warn!(error = %e.message, "Wallet connection failed");
                *self.status.write() = WalletStatus::Error(e.normalized());
                Err(e)
            }
        }
    }

    /// Drop the session.
    pub fn disconnect(&self) {
        *self.status.write() = WalletStatus::Disconnected;
    }

    async fn try_connect(&self) -> Result<Address, ChainError> {
        let chain_id = self.provider.get_chain_id().await?;
        if chain_id != self.chain_id {
            return Err(ChainError::with_short(
                "Wrong network",
                format!("Node is on chain {chain_id}, expected {}", self.chain_id),
            ));
        }

        if let Some(account) = self.preferred_account {
            return Ok(account);
        }

        let accounts = self.provider.get_accounts().await?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| ChainError::with_short("No accounts available", "eth_accounts returned an empty list"))
    }

    fn require_account(&self) -> Result<Address, ChainError> {
        self.account().ok_or_else(|| ChainError::new("Wallet not connected"))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, ChainError> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}

#[async_trait]
impl WalletClient for RpcWallet {
    fn account(&self) -> Option<Address> {
        self.status.read().address()
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<TxHash, ChainError> {
        let from = self.require_account()?;
        let tx = TransactionRequest::default().with_from(from).with_to(to).with_value(value);
        self.send_transaction(tx).await
    }

    async fn call_transfer(&self, token: Address, to: Address, value: U256) -> Result<TxHash, ChainError> {
        let from = self.require_account()?;
        let data = IERC20::transferCall { to, amount: value }.abi_encode();
        let tx = TransactionRequest::default().with_from(from).with_to(token).with_input(data);
        self.send_transaction(tx).await
    }

    async fn balance(&self, token: Option<Address>, owner: Address) -> Result<U256, ChainError> {
        let Some(token) = token else {
            return Ok(self.provider.get_balance(owner).await?);
        };

        let data = IERC20::balanceOfCall { owner }.abi_encode();
        let tx = TransactionRequest::default().with_to(token).with_input(data);
        let raw = self.provider.call(tx).await?;
        IERC20::balanceOfCall::abi_decode_returns(&raw)
            .map_err(|e| ChainError::new(format!("Invalid balanceOf response from {token}: {e}")))
    }

    async fn receipt_status(&self, hash: TxHash) -> Result<Option<bool>, ChainError> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt.map(|r| r.status()))
    }
}
