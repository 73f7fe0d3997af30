//! Data model for the Zeus publications directory and cost quotes.
#![deny(unsafe_code)]

pub mod decimal;
pub mod error;
pub mod ids;
pub mod money;
pub mod priced;
pub mod publication;

pub use decimal::parse_decimal;
pub use error::{ModelError, Result};
pub use ids::PublicationId;
pub use money::Money;
pub use priced::PricedPublication;
pub use publication::Publication;
