//! Remote Resource Errors

use thiserror::Error;

/// Common result type for remote resource calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Any failed call: transport, decode, or a non-2xx status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: u16 },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            ApiError::Status { status } => Some(*status),
        }
    }
}
