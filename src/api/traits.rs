//! Trait abstraction for the remote capabilities to enable mocking in tests

use super::types::{CreateNaverRequest, Naver, Session};
use anyhow::Result;
use async_trait::async_trait;

/// Authentication against the Navedex API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Forget the current session
    async fn sign_out(&self);
}

/// Naver record operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NaverService: Send + Sync {
    /// Create a naver, returning the stored record
    async fn create_naver(&self, request: &CreateNaverRequest) -> Result<Naver>;
}
