//! Circulation matching for the publications directory.
#![deny(unsafe_code)]

pub mod circulation;
pub mod engine;
pub mod lookup;

pub use circulation::{CirculationTokens, MatchedOn};
pub use engine::{CirculationMatch, find_matches, match_publications, matched_on};
pub use lookup::{find_by_id, find_by_ids};
