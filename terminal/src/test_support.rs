//! Fixtures shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::TransferLogRequest;

use crate::core::service::{TransferLogService, WalletClient};
use crate::services::wallet::ChainError;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCall {
    Native { to: Address, value: U256 },
    Token { token: Address, to: Address, value: U256 },
    Balance { token: Option<Address> },
}

/// Scriptable wallet that records every chain call.
pub struct MockWallet {
    pub account: Option<Address>,
    pub hash: TxHash,
    pub fail_with: Option<ChainError>,
    pub balances: Vec<(Option<Address>, U256)>,
    pub receipts: Mutex<VecDeque<Option<bool>>>,
    pub calls: Mutex<Vec<WalletCall>>,
}

impl MockWallet {
    pub fn connected() -> Self {
        Self {
            account: Some(Address::repeat_byte(0xaa)),
            hash: TxHash::repeat_byte(0x11),
            fail_with: None,
            balances: Vec::new(),
            receipts: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            account: None,
            ..Self::connected()
        }
    }

    pub fn failing(error: ChainError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::connected()
        }
    }

    pub fn calls(&self) -> Vec<WalletCall> {
        self.calls.lock().clone()
    }

    fn outcome(&self) -> Result<TxHash, ChainError> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(self.hash),
        }
    }
}

#[async_trait]
impl WalletClient for MockWallet {
    fn account(&self) -> Option<Address> {
        self.account
    }

    async fn send_native(&self, to: Address, value: U256) -> Result<TxHash, ChainError> {
        self.calls.lock().push(WalletCall::Native { to, value });
        self.outcome()
    }

    async fn call_transfer(&self, token: Address, to: Address, value: U256) -> Result<TxHash, ChainError> {
        self.calls.lock().push(WalletCall::Token { token, to, value });
        self.outcome()
    }

    async fn balance(&self, token: Option<Address>, _owner: Address) -> Result<U256, ChainError> {
        self.calls.lock().push(WalletCall::Balance { token });
        self.balances
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| *value)
            .ok_or_else(|| ChainError::new("balance unavailable"))
    }

    async fn receipt_status(&self, _hash: TxHash) -> Result<Option<bool>, ChainError> {
        Ok(self.receipts.lock().pop_front().flatten())
    }
}

/// Transfer log that keeps every entry it receives.
#[derive(Default)]
pub struct RecordingLog {
    pub fail: bool,
    /// Per-amount latency before an entry is recorded
    pub delays: HashMap<String, Duration>,
    pub entries: Mutex<Vec<TransferLogRequest>>,
}

impl RecordingLog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, amount: &str, delay: Duration) -> Self {
        self.delays.insert(amount.to_string(), delay);
        self
    }

    pub fn entries(&self) -> Vec<TransferLogRequest> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl TransferLogService for RecordingLog {
    async fn log_transfer(&self, entry: TransferLogRequest) -> Result<(), String> {
        if let Some(delay) = self.delays.get(&entry.amount) {
            tokio::time::sleep(*delay).await;
        }
        self.entries.lock().push(entry);
        if self.fail {
            return Err("backend log failed: 500 Internal Server Error".to_string());
        }
        Ok(())
    }
}
