//! Money formatting and parsing helpers
//!
//! Amounts are stored as plain f64 throughout; rounding happens only at
//! display time, to two decimal places. Reports use the thousands-grouped
//! form, detail views the plain form.

use std::fmt;

/// Format an amount to two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format an amount to two decimal places with thousands separators
///
/// # Examples
/// ```
/// use rentledger::models::money::format_grouped;
/// assert_eq!(format_grouped(1234.5), "1,234.50");
/// ```
pub fn format_grouped(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (formatted.as_str(), "00"),
    };

    let mut reversed = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (count, ch) in int_part.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    let grouped: String = reversed.chars().rev().collect();

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format an amount with a currency symbol, grouped
pub fn format_with_symbol(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{}", symbol, format_grouped(-amount))
    } else {
        format!("{}{}", symbol, format_grouped(amount))
    }
}

/// Parse an amount from a string
///
/// Accepts formats: "10.50", "-10.50", "£10.50", "$10.50", "1,234.56"
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let trimmed = s.trim();

    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, trimmed)
    };

    // Remove currency symbol if present
    let rest = rest
        .strip_prefix('£')
        .or_else(|| rest.strip_prefix('$'))
        .unwrap_or(rest);

    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.trim().to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
