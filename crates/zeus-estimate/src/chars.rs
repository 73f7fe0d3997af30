use std::fmt;
use std::num::NonZeroU64;

use crate::error::EstimateError;

/// Length of a notice in characters. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(into = "u64")]
pub struct CharCount(NonZeroU64);

impl CharCount {
    pub fn new(count: u64) -> Result<Self, EstimateError> {
        NonZeroU64::new(count)
            .map(Self)
            .ok_or(EstimateError::NonPositiveCharCount(0))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<i64> for CharCount {
    type Error = EstimateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map_err(|_| EstimateError::NonPositiveCharCount(value))
            .and_then(Self::new)
    }
}

impl From<CharCount> for u64 {
    fn from(value: CharCount) -> Self {
        value.get()
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
