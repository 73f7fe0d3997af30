use std::fmt;

use serde::Serialize;

/// A postcode sector: the outcode plus the first digit of the inward code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Sector {
    outcode: String,
    digit: char,
}

impl Sector {
    pub(crate) fn new(outcode: &str, digit: char) -> Self {
        Self {
            outcode: outcode.to_string(),
            digit,
        }
    }

    /// Canonical form without internal whitespace, e.g. `SW1A1`.
    pub fn compact(&self) -> String {
        format!("{}{}", self.outcode, self.digit)
    }

    /// Form with a single space between outcode and digit, e.g. `SW1A 1`.
    pub fn spaced(&self) -> String {
        format!("{} {}", self.outcode, self.digit)
    }

    pub fn digit(&self) -> char {
        self.digit
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.outcode, self.digit)
    }
}

impl From<Sector> for String {
    fn from(value: Sector) -> Self {
        value.compact()
    }
}

/// A validated, uppercase postcode split into the parts circulation lists use.
///
/// Only [`crate::normalize`] builds these, so holding one means the input
/// passed the postcode grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostcodeParts {
    pub(crate) outcode: String,
    pub(crate) district: String,
    pub(crate) sector: Option<Sector>,
    pub(crate) postcode: Option<String>,
}

impl PostcodeParts {
    /// Outward code, e.g. `SW1A`.
    pub fn outcode(&self) -> &str {
        &self.outcode
    }

    /// Outward code without a sub-district letter, e.g. `SW1`.
    ///
    /// Equal to the outcode when the outcode has no sub-district.
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Sector, absent when only an outcode was supplied.
    pub fn sector(&self) -> Option<&Sector> {
        self.sector.as_ref()
    }

    /// The full canonical postcode (`SW1A 1AA`) when an inward code was given.
    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }
}

impl fmt::Display for PostcodeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.postcode, &self.sector) {
            (Some(postcode), _) => f.write_str(postcode),
            (None, Some(sector)) => f.write_str(&sector.spaced()),
            (None, None) => f.write_str(&self.outcode),
        }
    }
}
