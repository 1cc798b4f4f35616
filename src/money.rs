//! Parsing and display formatting for money amounts.
//!
//! Amounts are fixed-point decimals so repeated aggregation does not
//! accumulate binary floating-point drift. The display contract is
//! thousands separators with exactly two fractional digits.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::Error;

/// Parse `text` as a non-negative decimal amount.
///
/// Fractional parts longer than two digits are accepted and kept as-is;
/// the 2-decimal-scale contract is owned by the storage column, not
/// enforced here.
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] if `text` is not a well-formed decimal
/// or is negative.
pub fn parse_amount(text: &str) -> Result<Decimal, Error> {
    let amount: Decimal = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(text.to_owned()))?;

    if amount < Decimal::ZERO {
        return Err(Error::InvalidAmount(text.to_owned()));
    }

    Ok(amount)
}

/// Format `amount` with thousands separators and exactly two fractional
/// digits, e.g. `1234.5` renders as `"1,234.50"`.
pub fn format_amount(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT
        .get_or_init(|| Formatter::currency("").unwrap().precision(Precision::Decimals(2)));

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT
        .get_or_init(|| Formatter::currency("-").unwrap().precision(Precision::Decimals(2)));

    let number = amount.to_f64().unwrap_or_default();

    let mut formatted = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must spell out the formatted
        // string for zero.
        return "0.00".to_owned();
    };

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

/// Format `amount` as a whole number with thousands separators, for labels
/// where the fractional part is noise, e.g. `"150,000"` in a tax bracket
/// range.
pub fn format_whole(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT
        .get_or_init(|| Formatter::currency("").unwrap().precision(Precision::Decimals(0)));

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT
        .get_or_init(|| Formatter::currency("-").unwrap().precision(Precision::Decimals(0)));

    let number = amount.to_f64().unwrap_or_default();

    if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        "0".to_owned()
    }
}
