//! Cost estimation for classified notices.
//!
//! ```
//! use zeus_estimate::{CharCount, estimate};
//! use zeus_model::{Publication, PublicationId};
//!
//! let paper = Publication::new(PublicationId::new("A").unwrap(), "Gazette", "SW1")
//!     .with_column("30", "5");
//! let quote = estimate(&paper, CharCount::new(300).unwrap()).unwrap();
//! assert_eq!(quote.cost.to_fixed_2(), "85.00");
//! ```
#![deny(unsafe_code)]

mod chars;
mod error;
mod estimate;

pub use chars::CharCount;
pub use error::EstimateError;
pub use estimate::{
    AVG_CHAR_WIDTH_FACTOR, AdLayout, BAND_HEIGHT_MM, EstimatedCost, FIXED_SURCHARGE, FONT_SIZE_PT,
    LEADING_PT, MINIMUM_HEIGHT_MM, MM_PER_POINT, PricingBasis, ad_layout, estimate,
};
