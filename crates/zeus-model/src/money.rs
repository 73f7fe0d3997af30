//! Fixed-point currency amounts.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ModelError;
use crate::decimal::split_decimal;

/// Fractional digits held by [`Money`].
const FRACTION_DIGITS: usize = 4;
const SCALE: i64 = 10_000;

/// A currency amount with four fractional digits.
///
/// Prices multiply by whole band counts, so arithmetic stays exact; rounding
/// only happens when the amount is rendered with two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Whole currency units (e.g. `60` for the fixed surcharge).
    pub const fn from_units(units: i64) -> Self {
        Self(units * SCALE)
    }

    /// Parses decimal text such as `"12.50"`.
    ///
    /// Fractional digits beyond the fourth round half away from zero.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let parts = split_decimal(raw).ok_or_else(|| ModelError::InvalidDecimal(raw.to_string()))?;
        let overflow = || ModelError::DecimalOverflow(raw.to_string());

        let integer: i64 = if parts.integer.is_empty() {
            0
        } else {
            parts.integer.parse().map_err(|_| overflow())?
        };

        let mut fraction: i64 = 0;
        for (idx, digit) in parts.fraction.bytes().take(FRACTION_DIGITS).enumerate() {
            let place = 10_i64.pow((FRACTION_DIGITS - 1 - idx) as u32);
            fraction += i64::from(digit - b'0') * place;
        }
        if let Some(next) = parts.fraction.as_bytes().get(FRACTION_DIGITS)
            && *next >= b'5'
        {
            fraction += 1;
        }

        let magnitude = integer
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;
        Ok(Self(if parts.negative {
            -magnitude
        } else {
            magnitude
        }))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by a whole count, e.g. a number of 10mm bands.
    pub fn checked_mul(self, count: u64) -> Option<Money> {
        i64::try_from(count)
            .ok()
            .and_then(|count| self.0.checked_mul(count))
            .map(Money)
    }

    /// Renders with exactly two decimals, rounding half away from zero.
    pub fn to_fixed_2(self) -> String {
        let cents = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.0 < 0 && cents != 0 { "-" } else { "" };
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl FromStr for Money {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed_2())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fixed_2())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}
