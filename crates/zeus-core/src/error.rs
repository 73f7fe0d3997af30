use thiserror::Error;
use zeus_directory::DirectoryError;
use zeus_postcode::PostcodeError;

/// Failures of the publication operations.
///
/// Everything except [`QuoteError::Directory`] is the caller's fault and is
/// raised before the directory is read.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("invalid JSON body: {0}")]
    MalformedBody(String),
    #[error("invalid charCount")]
    InvalidCharCount,
    #[error("postcode is required")]
    MissingPostcode,
    #[error("invalid postcode: {0:?}")]
    InvalidPostcode(String),
    #[error("id is required")]
    MissingId,
    #[error("invalid ids")]
    InvalidIds,
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl QuoteError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Directory(_))
    }

    /// The HTTP status a request boundary should answer with.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }
}

impl From<PostcodeError> for QuoteError {
    fn from(error: PostcodeError) -> Self {
        match error {
            PostcodeError::Empty => Self::MissingPostcode,
            PostcodeError::Invalid(raw) => Self::InvalidPostcode(raw),
        }
    }
}
