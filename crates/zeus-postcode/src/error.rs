use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostcodeError {
    #[error("postcode is empty")]
    Empty,
    #[error("invalid postcode: {0:?}")]
    Invalid(String),
}
