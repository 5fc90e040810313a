//! # Utilities Library
//!
//! Shared utility functions for environment variables and time formatting.

pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{format_clock, now_utc};
