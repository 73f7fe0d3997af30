//! UK postcode normalization.
//!
//! Turns free-text postcodes into the parts publication circulation lists are
//! written in: outcode (`SW1A`), district (`SW1`) and sector (`SW1A1`).
//!
//! ```
//! let parts = zeus_postcode::normalize(" sw1a 1aa ").unwrap();
//! assert_eq!(parts.outcode(), "SW1A");
//! assert_eq!(parts.district(), "SW1");
//! assert_eq!(parts.sector().unwrap().compact(), "SW1A1");
//! ```
#![deny(unsafe_code)]

mod error;
mod normalize;
mod parts;

pub use error::PostcodeError;
pub use normalize::{district_of, is_outcode, is_valid, normalize};
pub use parts::{PostcodeParts, Sector};
