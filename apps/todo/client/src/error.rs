use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failures surfaced by the client data layer
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned status {status}")]
    Api { status: u16 },

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing the local fallback store failed
    #[error("Local store error: {0}")]
    LocalStore(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClientError::Api {
                status: status.as_u16(),
            },
            None => ClientError::Network(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::LocalStore(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::LocalStore(err.to_string())
    }
}
