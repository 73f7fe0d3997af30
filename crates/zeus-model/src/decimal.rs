//! Decimal text handling for directory fields.
//!
//! The directory stores prices and widths as decimal strings. These helpers
//! define the accepted grammar (optional sign, digits, optional fraction) and
//! the parse-failure behavior: anything outside the grammar is absent.

/// Sign and digit groups of a validated decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalParts<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
}

pub(crate) fn split_decimal(raw: &str) -> Option<DecimalParts<'_>> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }
    Some(DecimalParts {
        negative,
        integer,
        fraction,
    })
}

/// Parses decimal text as `f64`, returning `None` outside the decimal grammar.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let parts = split_decimal(raw)?;
    let integer = if parts.integer.is_empty() {
        "0"
    } else {
        parts.integer
    };
    let text = if parts.fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{}", parts.fraction)
    };
    let value: f64 = text.parse().ok()?;
    let value = if parts.negative { -value } else { value };
    value.is_finite().then_some(value)
}
