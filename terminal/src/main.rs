use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use cik_terminal::app::{Command, CommandLogEntry, LogKind, Terminal};
use cik_terminal::core::AppConfig;
use cik_terminal::debug;
use cik_terminal::services::api::{fetch_activity, ApiClient};
use cik_terminal::core::HandleDirectory;
use cik_terminal::services::{InMemoryDirectory, RpcWallet, TransferSubmitter};
use tokio::io::{AsyncBufReadExt, BufReader};

const ACTIVITY_PREVIEW: usize = 5;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init_logger();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let api = Arc::new(ApiClient::new(&config.api_base, &config.api_key));
    let wallet = match RpcWallet::new(&config.rpc_url, config.chain_id, config.wallet_account) {
        Ok(wallet) => Arc::new(wallet),
        Err(e) => {
            tracing::error!(error = %e.message, "Invalid wallet configuration");
            eprintln!("{}", e.message);
            return ExitCode::FAILURE;
        }
    };

    match wallet.connect().await {
        Ok(account) => println!("Connected: {}", shared::truncate_address(&account.to_string())),
        Err(e) => println!("{RED}Wallet not connected: {e}{RESET}"),
    }

    let submitter = Arc::new(TransferSubmitter::new(wallet).with_transfer_log(api.clone(), config.chain_id));

    print_activity(&api).await;

    if let Some(warning) = config.token_warning() {
        tracing::warn!("{warning}");
        println!("{RED}{warning}{RESET}");
    }

    let directory: Arc<dyn HandleDirectory> = if config.demo_directory {
        tracing::info!("Resolving handles from the demo directory");
        println!("{DIM}Demo directory: handles resolve locally{RESET}");
        Arc::new(InMemoryDirectory::demo())
    } else {
        api
    };

    let mut terminal = Terminal::new(config, directory, submitter.clone());
    let tokens = terminal.tokens().iter().map(|t| t.label()).collect::<Vec<_>>().join(", ");
    println!("Tokens: {tokens}");
    terminal.log().iter().for_each(print_entry);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("$ ");
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!(error = %e, "Failed to flush prompt");
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stdin");
                break;
            }
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let seen = terminal.log().len();
        terminal.execute(input).await;

        if matches!(Command::parse(input), Some(Command::Clear)) {
            print!("\x1b[2J\x1b[H");
            continue;
        }

        // Echo lines are skipped: the user just typed them
        terminal.log()[seen..].iter().filter(|e| !e.is_echo()).for_each(print_entry);
    }

    submitter.flush_log().await;
    tracing::info!("Session ended");
    ExitCode::SUCCESS
}

fn print_entry(entry: &CommandLogEntry) {
    let color = match entry.kind {
        LogKind::Success => GREEN,
        LogKind::Error => RED,
        LogKind::Info => "",
    };
    let clock = lib_utils::format_clock(entry.timestamp);
    for line in entry.output.lines() {
        println!("{DIM}{clock}{RESET} {color}{line}{RESET}");
    }
}

async fn print_activity(api: &ApiClient) {
    let activity = fetch_activity(api, ACTIVITY_PREVIEW).await;
    if activity.is_empty() {
        return;
    }

    println!("Recent activity:");
    for item in &activity {
        let when = item.timestamp().map(lib_utils::format_clock).unwrap_or_default();
        println!(
            "  {DIM}{when}{RESET} {} -> {} {} {}",
            shared::truncate_address(&item.from),
            shared::truncate_address(&item.to),
            item.amount,
            item.token
        );
    }
    println!();
}
