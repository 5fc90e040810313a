//! # Terminal State Types
//!
//! The scrollback log and the parsed command grammar.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Success,
    Error,
    Info,
}

/// One line of terminal scrollback. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLogEntry {
    pub id: Uuid,
    /// The command this line belongs to
    pub command: String,
    pub output: String,
    pub kind: LogKind,
    pub timestamp: DateTime<Utc>,
}

impl CommandLogEntry {
    pub fn new(command: &str, output: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            command: command.to_string(),
            output: output.into(),
            kind,
            timestamp: lib_utils::now_utc(),
        }
    }

    /// Whether this is the `$ <input>` echo of a command.
    pub fn is_echo(&self) -> bool {
        self.kind == LogKind::Info && self.output.starts_with("$ ")
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Balance,
    /// Positional arguments, validated when the command runs
    Send(Vec<String>),
    Unknown(String),
}

impl Command {
    /// Split `input` on whitespace; the first token, lower-cased, names the command.
    ///
    /// Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let name = parts.next()?.to_lowercase();

        Some(match name.as_str() {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "balance" => Command::Balance,
            "send" => Command::Send(parts.map(str::to_string).collect()),
            _ => Command::Unknown(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("  Clear  "), Some(Command::Clear));
        assert_eq!(Command::parse("BaLaNcE"), Some(Command::Balance));
    }

    #[test]
    fn test_parse_send_collapses_whitespace() {
        assert_eq!(
            Command::parse("send  @adi   100 CIK  thanks   friend"),
            Some(Command::Send(
                ["@adi", "100", "CIK", "thanks", "friend"].map(String::from).to_vec()
            ))
        );
    }

    #[test]
    fn test_parse_unknown_and_blank() {
        assert_eq!(Command::parse("Deploy now"), Some(Command::Unknown("deploy".to_string())));
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_echo_detection() {
        assert!(CommandLogEntry::new("help", "$ help", LogKind::Info).is_echo());
        assert!(!CommandLogEntry::new("help", "$ help", LogKind::Error).is_echo());
        assert!(!CommandLogEntry::new("help", "Available commands", LogKind::Info).is_echo());
    }
}
