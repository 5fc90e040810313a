//! # Time Utilities
//!
//! Utilities for time formatting using chrono.

use chrono::{DateTime, Local, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as a local wall-clock `HH:MM:SS`, used for scrollback prefixes.
pub fn format_clock(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_shape() {
        let clock = format_clock(now_utc());
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}
