//! Circulation lists as explicit token sets.
//!
//! Directories store circulation as one free-text string such as
//! `"SW1, SW1A, EC1"`. Parsing it into tokens here makes whole-token
//! comparison the only kind of comparison: `SW1` can never match inside `SW11`.

use std::collections::BTreeSet;

use zeus_postcode::{PostcodeParts, is_outcode};

/// Which part of the query postcode a circulation token matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedOn {
    Outcode,
    District,
    Sector,
}

impl MatchedOn {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outcode => "outcode",
            Self::District => "district",
            Self::Sector => "sector",
        }
    }
}

/// Canonical tokens of a circulation string.
///
/// Tokens are trimmed, uppercased and have internal whitespace runs collapsed
/// to one space; empty entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CirculationTokens {
    tokens: BTreeSet<String>,
}

impl CirculationTokens {
    pub fn parse(circulation: &str) -> Self {
        let tokens = circulation
            .split(',')
            .map(canonical_token)
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Whole-token membership; `token` is canonicalized first.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&canonical_token(token))
    }

    /// The first postcode part covered by these tokens, checked from the
    /// broadest (outcode) to the narrowest (sector).
    pub fn covers(&self, parts: &PostcodeParts) -> Option<MatchedOn> {
        if self.tokens.contains(parts.outcode()) {
            return Some(MatchedOn::Outcode);
        }
        if self.tokens.contains(parts.district()) {
            return Some(MatchedOn::District);
        }
        let sector = parts.sector()?;
        if self.tokens.contains(&sector.spaced()) {
            return Some(MatchedOn::Sector);
        }
        // `E11` is an outcode, not sector `E1 1`; only shapes that cannot be an
        // outcode are read as compact sectors.
        let compact = sector.compact();
        if !is_outcode(&compact) && self.tokens.contains(&compact) {
            return Some(MatchedOn::Sector);
        }
        None
    }
}

fn canonical_token(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use zeus_postcode::normalize;

    use super::*;

    #[test]
    fn parses_tokens_in_any_position() {
        let tokens = CirculationTokens::parse(" sw1,  SW1A ,ec1 ,, ");
        assert_eq!(tokens.len(), 3);
        assert!(tokens.contains("SW1"));
        assert!(tokens.contains("sw1a"));
        assert!(tokens.contains(" EC1"));
        assert!(!tokens.contains(""));
    }

    #[test]
    fn internal_whitespace_collapses() {
        let tokens = CirculationTokens::parse("SW1A   1, E1\t1");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["E1 1", "SW1A 1"]);
    }

    #[test]
    fn covers_reports_broadest_part() {
        let parts = normalize("SW1A 1AA").unwrap();
        assert_eq!(
            CirculationTokens::parse("SW1A, SW1").covers(&parts),
            Some(MatchedOn::Outcode)
        );
        assert_eq!(
            CirculationTokens::parse("SW1").covers(&parts),
            Some(MatchedOn::District)
        );
        assert_eq!(
            CirculationTokens::parse("SW1A 1").covers(&parts),
            Some(MatchedOn::Sector)
        );
        assert_eq!(
            CirculationTokens::parse("SW1A1").covers(&parts),
            Some(MatchedOn::Sector)
        );
    }

    #[test]
    fn compact_token_that_is_an_outcode_is_not_a_sector() {
        let parts = normalize("E1 1AA").unwrap();
        assert_eq!(CirculationTokens::parse("E11").covers(&parts), None);
        assert_eq!(
            CirculationTokens::parse("E1 1").covers(&parts),
            Some(MatchedOn::Sector)
        );
    }

    #[test]
    fn outcode_query_never_matches_sector_tokens() {
        let parts = normalize("SW1A").unwrap();
        assert_eq!(CirculationTokens::parse("SW1A 1, SW1A2").covers(&parts), None);
    }
}
