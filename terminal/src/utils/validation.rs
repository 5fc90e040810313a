//! Validation utilities for user input
//!
//! Amounts are typed as human decimal strings ("100.5", "1,000") and converted
//! to fixed-point integers in the token's smallest unit. Recipients are either
//! a `0x` address or an `@handle` that a directory resolves later.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Fraction digits kept by [`format_amount`] unless told otherwise.
pub const DEFAULT_DISPLAY_DECIMALS: usize = 6;

/// Length of a `0x`-prefixed 20-byte address.
const ADDRESS_LEN: usize = 42;

/// Decimal digits of `U256::MAX`.
const MAX_UNIT_DIGITS: i64 = 78;

/// Why an amount was rejected. The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is required")]
    Required,
    #[error("Invalid amount format")]
    InvalidFormat,
    #[error("Amount must be greater than 0")]
    NotPositive,
    /// The scaled value does not fit in 256 bits.
    #[error("Amount too large")]
    TooLarge,
}

/// Validate a user amount and scale it by `10^decimals`.
///
/// The input is read as a floating point number (commas stripped), multiplied
/// by `10^decimals` and floored. Values above `U256::MAX` are rejected.
///
/// ```rust
/// use cik_terminal::utils::validation::validate_amount;
/// use alloy_primitives::U256;
///
/// assert_eq!(validate_amount("1.5", 18).unwrap(), U256::from(1_500_000_000_000_000_000u64));
/// assert!(validate_amount("-1", 18).is_err());
/// ```
pub fn validate_amount(input: &str, decimals: u8) -> Result<U256, AmountError> {
    if input.trim().is_empty() {
        return Err(AmountError::Required);
    }

    let clean = strip_separators(input);
    let num = parse_number(&clean)?;

    if num <= 0.0 {
        return Err(AmountError::NotPositive);
    }

    let scaled = num * 10f64.powi(i32::from(decimals));
    floor_to_u256(scaled).ok_or(AmountError::TooLarge)
}

/// Exact decimal conversion of `amount` into smallest units.
///
/// Unlike [`validate_amount`] no floating point is involved: "0.1" at 18
/// decimals is exactly `10^17`. Exponent notation ("1.5e3") is shifted
/// exactly. Fraction digits past `decimals` are rounded half-up. Zero is
/// rejected.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    if amount.trim().is_empty() {
        return Err(AmountError::Required);
    }

    let clean = strip_separators(amount);
    let unsigned = clean.strip_prefix('+').unwrap_or(&clean);
    if unsigned.starts_with('-') {
        return match parse_number(unsigned) {
            Ok(_) => Err(AmountError::NotPositive),
            Err(e) => Err(e),
        };
    }

    let (mantissa, exponent) = match unsigned.find(|c| c == 'e' || c == 'E') {
        Some(i) => {
            let exponent = unsigned[i + 1..]
                .parse::<i64>()
                .map_err(|_| AmountError::InvalidFormat)?;
            (&unsigned[..i], exponent)
        }
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::InvalidFormat);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat);
    }

    let significant = format!("{int_part}{frac_part}");
    let significant = significant.trim_start_matches('0');
    if significant.is_empty() {
        return Err(AmountError::NotPositive);
    }

    // Position of the decimal point within `significant`, scaled to smallest units
    let leading_zeros = int_part.len() + frac_part.len() - significant.len();
    let point = (int_part.len() as i64 - leading_zeros as i64 + i64::from(decimals)).saturating_add(exponent);
    if point > MAX_UNIT_DIGITS {
        return Err(AmountError::TooLarge);
    }
    if point < 0 {
        return Err(AmountError::NotPositive);
    }

    let point = point as usize;
    let (kept, dropped) = if significant.len() > point {
        significant.split_at(point)
    } else {
        (significant, "")
    };

    let mut digits = String::with_capacity(point);
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(point - kept.len()));

    let mut value = if digits.is_empty() {
        U256::ZERO
    } else {
        digits.parse::<U256>().map_err(|_| AmountError::TooLarge)?
    };

    if dropped.as_bytes().first().is_some_and(|d| *d >= b'5') {
        value = value.checked_add(U256::from(1u8)).ok_or(AmountError::TooLarge)?;
    }

    if value.is_zero() {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

/// Render a smallest-unit value as a human decimal string.
///
/// At most `display_decimals` fraction digits are shown (truncated, not
/// rounded) and trailing zeros are trimmed.
///
/// ```rust
/// use cik_terminal::utils::validation::format_amount;
/// use alloy_primitives::U256;
///
/// assert_eq!(format_amount(U256::from(1_500_000_000_000_000_000u64), 18, 6), "1.5");
/// ```
pub fn format_amount(amount: U256, decimals: u8, display_decimals: usize) -> String {
    let (quotient, remainder) = match U256::from(10u8).checked_pow(U256::from(decimals)) {
        Some(divisor) => (amount / divisor, amount % divisor),
        // 10^decimals exceeds 256 bits, so every representable amount is a fraction.
        None => (U256::ZERO, amount),
    };

    let mut result = quotient.to_string();

    if !remainder.is_zero() {
        let remainder_str = format!("{:0>width$}", remainder.to_string(), width = usize::from(decimals));
        let shown: String = remainder_str.chars().take(display_decimals).collect();
        let trimmed = shown.trim_end_matches('0');
        if !trimmed.is_empty() {
            result.push('.');
            result.push_str(trimmed);
        }
    }

    result
}

/// True iff `value` is `0x` followed by exactly 40 hex digits (any case).
pub fn is_address(value: &str) -> bool {
    value.len() == ADDRESS_LEN
        && value.starts_with("0x")
        && value[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a string accepted by [`is_address`].
pub fn parse_address(value: &str) -> Option<Address> {
    if !is_address(value) {
        return None;
    }
    value.parse::<Address>().ok()
}

/// True iff `handle` is `@` followed by one or more of `[a-zA-Z0-9_]`.
pub fn is_valid_handle(handle: &str) -> bool {
    match handle.strip_prefix('@') {
        Some(name) => !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'),
        None => false,
    }
}

/// What a recipient field currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Nothing typed yet (empty or whitespace)
    Empty,
    Address(Address),
    /// A syntactically valid `@handle`, not yet resolved
    Handle(String),
    Invalid,
}

/// Classify a recipient input. Surrounding whitespace is ignored.
pub fn classify_recipient(input: &str) -> Recipient {
    let input = input.trim();
    if input.is_empty() {
        return Recipient::Empty;
    }
    if let Some(address) = parse_address(input) {
        return Recipient::Address(address);
    }
    if is_valid_handle(input) {
        return Recipient::Handle(input.to_string());
    }
    Recipient::Invalid
}

fn strip_separators(input: &str) -> String {
    input.trim().chars().filter(|c| *c != ',').collect()
}

/// Parse a plain decimal or exponent number. `inf`/`nan` spellings are format errors,
/// while numerically overflowing literals ("1e400") count as too large.
fn parse_number(clean: &str) -> Result<f64, AmountError> {
    let numeric_chars = clean
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if clean.is_empty() || !numeric_chars {
        return Err(AmountError::InvalidFormat);
    }

    let num = clean.parse::<f64>().map_err(|_| AmountError::InvalidFormat)?;
    if num.is_nan() {
        return Err(AmountError::InvalidFormat);
    }
    if num.is_infinite() && num > 0.0 {
        return Err(AmountError::TooLarge);
    }
    Ok(num)
}

/// Floor a non-negative float into a `U256`, `None` if it does not fit.
fn floor_to_u256(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let value = value.floor();
    if value < 1.0 {
        return Some(U256::ZERO);
    }

    // value = mantissa * 2^exponent with the implicit leading bit restored
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64 - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);

    if exponent < 0 {
        // Integral after floor, so the shifted-out bits are zero
        return Some(U256::from(mantissa >> (-exponent) as u32));
    }

    let shift = exponent as usize;
    if 53 + shift > 256 {
        return None;
    }
    Some(U256::from(mantissa) << shift)
}
