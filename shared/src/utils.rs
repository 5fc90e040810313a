//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting `0x` wallet addresses and transaction hashes for display:
//! - [`format_address`] - Keep the first N and last M characters
//! - [`truncate_address`] - `0x1234...7890` style (prefix included in the head)
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x1234567890123456789012345678901234567890";
//! assert_eq!(truncate_address(address), "0x1234...7890");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1234567890123456789012345678901234567890";
/// assert_eq!(format_address(addr, 6, 4), "0x1234...7890");
/// assert_eq!(format_address("0x12", 6, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four hex characters, ellipsis, and the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x1234567890123456789012345678901234567890";
        assert_eq!(format_address(addr, 6, 4), "0x1234...7890");
        assert_eq!(format_address(addr, 10, 8), "0x12345678...34567890");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x12", 6, 4), "0x12");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_non_ascii_passthrough() {
        assert_eq!(format_address("@adiééééééééééé", 3, 3), "@adiééééééééééé");
    }

    #[test]
    fn test_truncate_hash() {
        let hash = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        assert_eq!(truncate_address(hash), "0x1234...cdef");
    }
}
