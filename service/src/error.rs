use thiserror::Error;

/// Coarse classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The URL string is not a well-formed absolute URL.
    InvalidInput,
    /// Network, DNS or TLS failure reported by the transport.
    TransportError,
    /// The transport succeeded but returned no body.
    EmptyResponse,
    /// A body was present but did not match the requested response type.
    DecodeError,
    /// The blocking bridge could not run the request.
    Runtime,
}

/// Every way a fetch or a decode can fail.  Errors are always returned as
/// values; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid URL")]
    InvalidUrl { url: String },
    #[error("{0}")]
    Transport(String),
    #[error("no data")]
    EmptyResponse,
    #[error("failed to decode image")]
    Image,
    #[error("failed to decode text")]
    Text,
    #[error("failed to decode integer")]
    Integer,
    #[error("{0}")]
    Json(String),
    #[error("key path '{path}' not found")]
    KeyPathNotFound { path: String },
    #[error("{0}")]
    Runtime(String),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => ErrorKind::InvalidInput,
            FetchError::Transport(_) => ErrorKind::TransportError,
            FetchError::EmptyResponse => ErrorKind::EmptyResponse,
            FetchError::Image
            | FetchError::Text
            | FetchError::Integer
            | FetchError::Json(_)
            | FetchError::KeyPathNotFound { .. } => ErrorKind::DecodeError,
            FetchError::Runtime(_) => ErrorKind::Runtime,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
