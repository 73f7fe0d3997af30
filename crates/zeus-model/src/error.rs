use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid publication id: {0:?}")]
    InvalidPublicationId(String),
    #[error("invalid decimal value: {0:?}")]
    InvalidDecimal(String),
    #[error("decimal value out of range: {0:?}")]
    DecimalOverflow(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
