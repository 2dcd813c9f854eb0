use pkg_types::validate::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures of the service-accounts client. None are retried here; retry
/// policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("service accounts API returned {status}")]
    Status { status: StatusCode },

    /// A list call returned something other than a JSON array.
    #[error("unexpected response shape: expected a JSON array of service accounts")]
    UnexpectedShape,

    #[error("Can't find service account {id}")]
    NotFound { id: String },

    /// A create/reset response carried an `error` field instead of a secret.
    #[error("service accounts API rejected the request: {error}{}", suffix(.description))]
    Rejected {
        error: String,
        description: Option<String>,
    },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn suffix(description: &Option<String>) -> String {
    match description {
        Some(d) => format!(" ({})", d),
        None => String::new(),
    }
}

impl ClientError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status } => Some(*status),
            ClientError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}
