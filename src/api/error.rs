//! Typed failures of the HTTP client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not signed in")]
    NotAuthenticated,

    #[error("request to {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
