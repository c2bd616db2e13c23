pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum BcyError {
    #[error("invalid request URL: {0}")]
    UrlConstruction(String),

    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request canceled")]
    Canceled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// Non-success status from the service. `status` renders as the full
    /// status line (`404 Not Found`); `message` is the envelope's `error`
    /// value, or empty when the body carried none.
    #[error("{status}, Message: {message}")]
    Service { status: StatusCode, message: String },

    #[error("decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no more pages: {0}")]
    NoMorePages(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl BcyError {
    /// HTTP status of a [`BcyError::Service`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the service answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
