use thiserror::Error;

/// Failure while loading the employee directory from its source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("failed to reach employee source: {0}")]
    Transport(String),
    #[error("invalid employee payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            FetchError::Status(status.as_u16())
        } else if value.is_decode() {
            FetchError::Decode(value.to_string())
        } else {
            FetchError::Transport(value.to_string())
        }
    }
}
