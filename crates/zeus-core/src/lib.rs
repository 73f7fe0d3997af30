//! Publication lookups and quotes for classified notices.
//!
//! Boundaries validate input into a [`QuoteRequest`], check the caller with an
//! [`Authorizer`], then call one of the operations against a
//! [`zeus_directory::PublicationDirectory`].
#![deny(unsafe_code)]

pub mod access;
pub mod error;
pub mod operations;
pub mod request;

pub use access::{
    AccessError, ApiKeyRecord, ApiKeyRegistry, Authorizer, Scope, bearer_token, hash_key,
};
pub use error::QuoteError;
pub use operations::{
    Quote, all_publications, get_publication, get_publications, list_publications,
    quote_publications,
};
pub use request::QuoteRequest;
