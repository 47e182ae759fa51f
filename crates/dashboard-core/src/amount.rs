//! Fixed-point token amounts.
//!
//! The ledger stores `u128` counts of the smallest unit. These helpers convert
//! between that and the decimal strings users type and read, without ever going
//! through floating point.

use crate::error::{DashboardError, Result};

/// Parse a decimal string such as `"1500"`, `"0.25"` or `".5"` into smallest units.
///
/// Zero is accepted here; forms that need a positive amount use
/// [`parse_positive_amount`].
pub fn parse_amount(input: &str, decimals: u8) -> Result<u128> {
    let input = input.trim();
    let (whole, fraction) = match input.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(DashboardError::InvalidAmount(format!("'{input}' is not a number")));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(DashboardError::InvalidAmount(format!("'{input}' is not a number")));
    }
    if fraction.len() > usize::from(decimals) {
        return Err(DashboardError::TooManyDecimals { max: decimals });
    }

    let scale = 10u128.checked_pow(u32::from(decimals)).ok_or(DashboardError::AmountOverflow)?;
    let whole_units = digits_to_u128(whole)?.checked_mul(scale).ok_or(DashboardError::AmountOverflow)?;

    // Right-pad the fraction to `decimals` digits: "5" at 6 decimals is 500_000.
    let padding = 10u128
        .checked_pow(u32::from(decimals) - fraction.len() as u32)
        .ok_or(DashboardError::AmountOverflow)?;
    let fraction_units =
        digits_to_u128(fraction)?.checked_mul(padding).ok_or(DashboardError::AmountOverflow)?;

    whole_units.checked_add(fraction_units).ok_or(DashboardError::AmountOverflow)
}

pub fn parse_positive_amount(input: &str, decimals: u8) -> Result<u128> {
    match parse_amount(input, decimals)? {
        0 => Err(DashboardError::NonPositiveAmount),
        amount => Ok(amount),
    }
}

/// Render smallest units as a grouped decimal, e.g. `1234567890000` at 6 decimals
/// is `"1,234,567.89"`. Trailing fractional zeros are dropped.
pub fn format_amount(value: u128, decimals: u8) -> String {
    let scale = 10u128.saturating_pow(u32::from(decimals));
    let whole = value / scale;
    let fraction = value % scale;

    let mut out = group_thousands(&whole.to_string());
    if fraction > 0 {
        let digits = format!("{fraction:0width$}", width = usize::from(decimals));
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn digits_to_u128(digits: &str) -> Result<u128> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u128>().map_err(|_| DashboardError::AmountOverflow)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
