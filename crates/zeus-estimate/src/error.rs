use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("character count must be a positive integer, got {0}")]
    NonPositiveCharCount(i64),
}
