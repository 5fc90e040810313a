//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

pub const LOG_FILE_PREFIX: &str = "cik-terminal.log";
pub const DEFAULT_LOG_LEVEL: &str = "cik_terminal=info,warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter, used when `RUST_LOG` is unset or invalid
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_dir: PathBuf::from(get_env_or("CIK_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
        }
    }

    /// Path of today's log file prefix inside the log directory
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs/cik-terminal.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_debug_detection() {
        let config = LogConfig {
            log_level: "cik_terminal=debug".to_string(),
            ..LogConfig::default()
        };
        assert!(config.is_debug_enabled());
    }
}
