//! # Terminal Command Interpreter
//!
//! Executes one line at a time against the wallet, directory and submitter,
//! appending human-readable lines to an append-only scrollback log.
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---|---|
//! | `help` | usage text |
//! | `clear` | empties the log |
//! | `balance` | balances of the supported tokens |
//! | `send <to> <amount> <symbol> [memo]` | validate, resolve, submit, confirm |
//!
//! Every command is echoed as `$ <input>` before its output. Failures are
//! always reported as log lines; nothing escapes `execute`.

use std::sync::Arc;

use alloy_primitives::TxHash;

use crate::app::state::{Command, CommandLogEntry, LogKind};
use crate::core::config::{AppConfig, TokenInfo};
use crate::core::service::{HandleDirectory, WalletClient};
use crate::services::resolver::resolve_recipient;
use crate::services::transfer::{AmountInput, TransferRequest, TransferSubmitter, TxStatus};
use crate::utils::validation::{format_amount, validate_amount, DEFAULT_DISPLAY_DECIMALS};

pub const WELCOME_TEXT: &str = "Welcome to CIK Transfer Terminal. Type \"help\" for available commands.";

pub const HELP_TEXT: &str = concat!(
    "CIK Transfer Terminal v",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Available commands:\n",
    "\n",
    "  send <to> <amount> <symbol> [memo]    Send tokens to an address or @handle\n",
    "  balance                               Show your token balances\n",
    "  help                                  Show this help message\n",
    "  clear                                 Clear terminal output\n",
    "\n",
    "Examples:\n",
    "  send @adi 100 CIK \"Payment for work\"\n",
    "  send 0x123...abc 50.5 CIK\n",
    "  balance",
);

pub const BALANCE_PLACEHOLDER: &str = "Feature coming soon - check your wallet for current balances";

const NOT_CONNECTED: &str = "Error: Wallet not connected";
const SEND_USAGE: &str = "Error: Usage: send <to> <amount> <symbol> [memo]";

pub struct Terminal {
    config: AppConfig,
    tokens: Vec<TokenInfo>,
    directory: Arc<dyn HandleDirectory>,
    submitter: Arc<TransferSubmitter>,
    log: Vec<CommandLogEntry>,
}

impl Terminal {
    pub fn new(config: AppConfig, directory: Arc<dyn HandleDirectory>, submitter: Arc<TransferSubmitter>) -> Self {
        let tokens = config.tokens();
        Self {
            config,
            tokens,
            directory,
            submitter,
            log: vec![CommandLogEntry::new("welcome", WELCOME_TEXT, LogKind::Info)],
        }
    }

    /// Scrollback, oldest first.
    pub fn log(&self) -> &[CommandLogEntry] {
        &self.log
    }

    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    /// Run one input line. Blank input is ignored.
    pub async fn execute(&mut self, input: &str) {
        let raw = input.trim();
        let Some(command) = Command::parse(raw) else {
            return;
        };

        tracing::debug!(command = ?command, "Executing terminal command");
        self.push(raw, format!("$ {raw}"), LogKind::Info);

        match command {
            Command::Help => self.push(raw, HELP_TEXT, LogKind::Info),
            Command::Clear => self.log.clear(),
            Command::Balance => self.balance(raw).await,
            Command::Send(args) => self.send(raw, &args).await,
            Command::Unknown(name) => self.push(
                raw,
                format!("Unknown command: {name}. Type \"help\" for available commands."),
                LogKind::Error,
            ),
        }
    }

    fn push(&mut self, command: &str, output: impl Into<String>, kind: LogKind) {
        self.log.push(CommandLogEntry::new(command, output, kind));
    }

    async fn balance(&mut self, raw: &str) {
        let wallet = Arc::clone(self.submitter.wallet());
        let Some(owner) = wallet.account() else {
            self.push(raw, NOT_CONNECTED, LogKind::Error);
            return;
        };

        let mut lines = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match wallet.balance(token.address, owner).await {
                Ok(value) => lines.push(format!(
                    "{}: {}",
                    token.symbol,
                    format_amount(value, token.decimals, DEFAULT_DISPLAY_DECIMALS)
                )),
                Err(e) => tracing::warn!(token = %token.symbol, error = %e, "Balance lookup failed"),
            }
        }

        if lines.is_empty() {
            self.push(raw, BALANCE_PLACEHOLDER, LogKind::Info);
        } else {
            self.push(raw, lines.join("\n"), LogKind::Info);
        }
    }

    async fn send(&mut self, raw: &str, args: &[String]) {
        if !self.submitter.wallet().is_connected() {
            self.push(raw, NOT_CONNECTED, LogKind::Error);
            return;
        }

        let [to, amount, symbol, memo @ ..] = args else {
            self.push(raw, SEND_USAGE, LogKind::Error);
            return;
        };

        let Some(token) = self.tokens.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol)).cloned() else {
            let available = self.tokens.iter().map(|t| t.symbol.as_str()).collect::<Vec<_>>().join(", ");
            self.push(
                raw,
                format!("Error: Unsupported token \"{symbol}\". Available: {available}"),
                LogKind::Error,
            );
            return;
        };

        if let Err(e) = validate_amount(amount, token.decimals) {
            self.push(raw, format!("Error: {e}"), LogKind::Error);
            return;
        }

        self.push(raw, format!("Resolving address: {to}..."), LogKind::Info);
        let recipient = match resolve_recipient(self.directory.as_ref(), to).await {
            Ok(address) => address,
            Err(e) => {
                tracing::debug!(recipient = %to, reason = %e, "Recipient not resolved");
                self.push(raw, format!("Error: Could not resolve address \"{to}\""), LogKind::Error);
                return;
            }
        };

        let memo = memo.join(" ");
        let memo_note = if memo.is_empty() {
            String::new()
        } else {
            format!(" with memo: \"{memo}\"")
        };
        self.push(
            raw,
            format!("Sending {amount} {} to {to}{memo_note}...", token.symbol),
            LogKind::Info,
        );

        let request = TransferRequest {
            recipient,
            amount: AmountInput::new(amount.as_str(), token.decimals),
            token_address: token.address,
            token_symbol: token.symbol.clone(),
            memo: (!memo.is_empty()).then_some(memo),
        };

        match self.submitter.submit(&request).await {
            Ok(hash) => {
                let shown = hash.to_string();
                self.push(raw, format!("Transaction submitted: {shown}"), LogKind::Success);
                self.push(raw, format!("View on explorer: {}", self.config.tx_url(&shown)), LogKind::Info);
                self.confirm(raw, hash).await;
            }
            Err(e) => self.push(raw, format!("Transfer failed: {e}"), LogKind::Error),
        }
    }

    async fn confirm(&mut self, raw: &str, hash: TxHash) {
        let attempts = self.config.confirm_attempts;
        if attempts == 0 {
            return;
        }

        match self.submitter.track_status(hash, self.config.confirm_interval, attempts).await {
            TxStatus::Confirmed => self.push(raw, "Transaction confirmed", LogKind::Info),
            TxStatus::Failed => self.push(raw, "Transaction reverted", LogKind::Error),
            _ => self.push(raw, "Still confirming, check the explorer for the final status", LogKind::Info),
        }
    }
}
