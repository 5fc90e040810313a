//! # Service Traits
//!
//! Capabilities the core depends on but does not implement: the handle
//! directory, the transfer log and the wallet/chain client. Production code
//! wires in [`ApiClient`] and [`RpcWallet`]; tests substitute in-memory mocks.
//!
//! [`ApiClient`]: crate::services::api::ApiClient
//! [`RpcWallet`]: crate::services::wallet::RpcWallet

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use shared::TransferLogRequest;

use crate::services::wallet::ChainError;

/// Looks up the address registered for an `@handle`.
#[async_trait]
pub trait HandleDirectory: Send + Sync {
    /// `Ok(None)` when the handle is unknown. `Err` is reserved for transport failures.
    async fn resolve(&self, handle: &str) -> Result<Option<Address>, String>;
}

/// Records completed transfers for the activity feed.
#[async_trait]
pub trait TransferLogService: Send + Sync {
    async fn log_transfer(&self, entry: TransferLogRequest) -> Result<(), String>;
}

/// Wallet session plus the chain operations the terminal needs.
///
/// Transaction construction, signing and gas estimation stay behind this trait.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// The connected account, `None` when no wallet session is active.
    fn account(&self) -> Option<Address>;

    fn is_connected(&self) -> bool {
        self.account().is_some()
    }

    /// Send `value` wei of the native asset to `to`.
    async fn send_native(&self, to: Address, value: U256) -> Result<TxHash, ChainError>;

    /// Call `transfer(to, value)` on the ERC-20 contract at `token`.
    async fn call_transfer(&self, token: Address, to: Address, value: U256) -> Result<TxHash, ChainError>;

    /// Balance of `owner` in smallest units; `token == None` means the native asset.
    async fn balance(&self, token: Option<Address>, owner: Address) -> Result<U256, ChainError>;

    /// `Ok(None)` while pending, otherwise whether the transaction succeeded.
    async fn receipt_status(&self, hash: TxHash) -> Result<Option<bool>, ChainError>;
}
