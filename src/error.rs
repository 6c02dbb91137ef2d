use thiserror::Error;

/// Failures talking to the Review API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// `error` field of the response body when one could be read.
    #[error("request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user for this failure. Rejections show the server's
    /// message or `rejected`; transport failures always show `unreachable`.
    pub fn describe(&self, rejected: &str, unreachable: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } if !message.is_empty() => {
                message.clone()
            }
            ApiError::Rejected { .. } => rejected.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => unreachable.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Failures reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write `{key}` to storage")]
    Write { key: String },
    #[error("failed to encode user record: {0}")]
    Encode(#[from] serde_json::Error),
}
