use shortly_core::{ShortenerError, StorageError};
use thiserror::Error;

/// Everything that can stop a request from succeeding.
///
/// Each variant maps to one status code and one public message; the
/// internal detail carried by a variant is only ever logged.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    #[error("missing longUrl parameter")]
    MissingLongUrl,
    #[error("short url not found: {0}")]
    NotFound(String),
    #[error("unsupported request method: {0}")]
    UnsupportedMethod(String),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("storage backend failed: {0}")]
    Backend(#[source] StorageError),
}

impl HandlerError {
    /// HTTP status code reported to the caller.
    pub fn status(&self) -> u16 {
        match self {
            HandlerError::MissingLongUrl | HandlerError::UnsupportedMethod(_) => 400,
            HandlerError::NotFound(_) => 404,
            // unparseable bodies share the catch-all 500
            HandlerError::MalformedBody(_) | HandlerError::Backend(_) => 500,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            HandlerError::MissingLongUrl => "Missing longUrl parameter",
            HandlerError::NotFound(_) => "Short URL not found",
            HandlerError::UnsupportedMethod(_) => "Unsupported request method",
            HandlerError::MalformedBody(_) | HandlerError::Backend(_) => "Internal Server Error",
        }
    }
}

impl From<ShortenerError> for HandlerError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::EmptyUrl => HandlerError::MissingLongUrl,
            ShortenerError::Storage(source) => HandlerError::Backend(source),
        }
    }
}
