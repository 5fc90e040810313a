//! # Transfer Submitter
//!
//! Turns a resolved [`TransferRequest`] into a chain transaction through the
//! [`WalletClient`] capability.
//!
//! ## Flow
//!
//! ```text
//! submit(request)
//!   ├── no account          → TransferError::NotConnected
//!   ├── parse amount        → native: 18 decimals, token: token decimals
//!   ├── send_native / call_transfer
//!   │     └── ChainError    → TransferError::Failed(normalized message)
//!   ├── remember last tx hash
//!   └── spawn transfer log (fire-and-forget, failures only logged)
//! ```
//!
//! Confirmation is tracked separately with [`TransferSubmitter::track_status`].

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use parking_lot::Mutex;
use shared::TransferLogRequest;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::core::service::{TransferLogService, WalletClient};
use crate::utils::validation::{parse_units, AmountError};

/// Precision of the chain's native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// A user-typed amount together with the precision it is denominated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    pub raw: String,
    pub decimals: u8,
}

impl AmountInput {
    pub fn new(raw: impl Into<String>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }
}

/// A transfer ready to submit: recipient already resolved, amount already validated.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub recipient: Address,
    pub amount: AmountInput,
    /// Token contract; `None` (or the zero address) sends the native asset
    pub token_address: Option<Address>,
    /// Symbol recorded in the transfer log
    pub token_symbol: String,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Wallet not connected")]
    NotConnected,
    #[error("{0}")]
    InvalidAmount(#[from] AmountError),
    #[error("{0}")]
    Failed(String),
}

/// Lifecycle of the most recent transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxStatus {
    #[default]
    Idle,
    Submitted,
    Confirming,
    Confirmed,
    Failed,
}

impl TxStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, TxStatus::Confirmed | TxStatus::Failed)
    }
}

struct TransferLog {
    service: Arc<dyn TransferLogService>,
    chain_id: u64,
}

pub struct TransferSubmitter {
    wallet: Arc<dyn WalletClient>,
    log: Option<TransferLog>,
    last_tx: Mutex<Option<TxHash>>,
    status: Mutex<TxStatus>,
    pending_logs: Mutex<JoinSet<()>>,
}

impl TransferSubmitter {
    pub fn new(wallet: Arc<dyn WalletClient>) -> Self {
        Self {
            wallet,
            log: None,
            last_tx: Mutex::new(None),
            status: Mutex::new(TxStatus::Idle),
            pending_logs: Mutex::new(JoinSet::new()),
        }
    }

    /// Record every successful transfer with `service`.
    pub fn with_transfer_log(mut self, service: Arc<dyn TransferLogService>, chain_id: u64) -> Self {
        self.log = Some(TransferLog { service, chain_id });
        self
    }

    pub fn wallet(&self) -> &Arc<dyn WalletClient> {
        &self.wallet
    }

    /// Hash of the last successfully submitted transaction.
    pub fn last_tx(&self) -> Option<TxHash> {
        *self.last_tx.lock()
    }

    pub fn status(&self) -> TxStatus {
        *self.status.lock()
    }

    #[tracing::instrument(skip(self, request), fields(to = %request.recipient, token = %request.token_symbol))]
    pub async fn submit(&self, request: &TransferRequest) -> Result<TxHash, TransferError> {
        let from = self.wallet.account().ok_or(TransferError::NotConnected)?;

        *self.last_tx.lock() = None;
        *self.status.lock() = TxStatus::Idle;

        let result = match request.token_address.filter(|a| !a.is_zero()) {
            None => {
                let value = parse_units(&request.amount.raw, NATIVE_DECIMALS)?;
                self.wallet.send_native(request.recipient, value).await
            }
            Some(token) => {
                let value = parse_units(&request.amount.raw, request.amount.decimals)?;
                self.wallet.call_transfer(token, request.recipient, value).await
            }
        };

        let hash = result.map_err(|e| {
            tracing::warn!(error = %e.message, "Transfer rejected");
            TransferError::Failed(e.normalized())
        })?;

        tracing::info!(hash = %hash, "Transfer submitted");
        *self.last_tx.lock() = Some(hash);
        *self.status.lock() = TxStatus::Submitted;

        self.spawn_log(from, request, hash);
        Ok(hash)
    }

    fn spawn_log(&self, from: Address, request: &TransferRequest, hash: TxHash) {
        let Some(log) = &self.log else {
            return;
        };

        let entry = TransferLogRequest {
            hash: hash.to_string(),
            from_addr: from.to_string(),
            to: request.recipient.to_string(),
            token: request.token_symbol.clone(),
            amount: request.amount.raw.clone(),
            memo: request.memo.clone().filter(|m| !m.is_empty()),
            chain_id: log.chain_id,
        };
        let service = Arc::clone(&log.service);

        let mut pending = self.pending_logs.lock();
        while let Some(finished) = pending.try_join_next() {
            log_join_error(finished);
        }
        pending.spawn(async move {
            let hash = entry.hash.clone();
            if let Err(e) = service.log_transfer(entry).await {
                tracing::warn!(hash = %hash, error = %e, "Transfer log failed");
            }
        });
    }

    /// Wait for every transfer log call still in flight.
    pub async fn flush_log(&self) {
        loop {
            let mut pending = std::mem::take(&mut *self.pending_logs.lock());
            if pending.is_empty() {
                return;
            }
            tracing::debug!(pending = pending.len(), "Flushing transfer logs");
            while let Some(finished) = pending.join_next().await {
                log_join_error(finished);
            }
        }
    }

    /// Poll the receipt of `hash` up to `attempts` times.
    ///
    /// Returns `Confirming` if the transaction is still pending afterwards.
    pub async fn track_status(&self, hash: TxHash, interval: Duration, attempts: usize) -> TxStatus {
        *self.status.lock() = TxStatus::Confirming;

        for attempt in 0..attempts {
            match self.wallet.receipt_status(hash).await {
                Ok(Some(true)) => return self.settle(TxStatus::Confirmed),
                Ok(Some(false)) => return self.settle(TxStatus::Failed),
                Ok(None) => {}
                Err(e) => tracing::warn!(hash = %hash, attempt, error = %e, "Receipt poll failed"),
            }
            if attempt + 1 < attempts {
                tokio::time::sleep(interval).await;
            }
        }

        TxStatus::Confirming
    }

    fn settle(&self, status: TxStatus) -> TxStatus {
        *self.status.lock() = status;
        status
    }
}

fn log_join_error(result: Result<(), tokio::task::JoinError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "Transfer log task aborted");
    }
}
