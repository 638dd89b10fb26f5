//! HTTP client for the Navedex API

use super::error::ApiError;
use super::traits::{AuthService, NaverService};
use super::types::{CreateNaverRequest, Naver, Session};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the Navedex REST API.
///
/// Holds the session obtained from `sign_in` in memory and attaches its token
/// to authenticated requests.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: RwLock<Option<Session>>,
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthService for ApiClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let path = "/users/login";
        let response = self
            .http
            .post(self.endpoint(path))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::info!(%status, "sign-in refused");
            return Err(ApiError::InvalidCredentials.into());
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let session: Session = response.json().await.map_err(ApiError::from)?;
        tracing::info!(user_id = %session.id, "signed in");
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) {
        if self.session.write().await.take().is_some() {
            tracing::info!("signed out");
        }
    }
}

#[async_trait]
impl NaverService for ApiClient {
    async fn create_naver(&self, request: &CreateNaverRequest) -> Result<Naver> {
        let path = "/navers";
        let token = self
            .session
            .read()
            .await
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or(ApiError::NotAuthenticated)?;

        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let naver: Naver = response.json().await.map_err(ApiError::from)?;
        tracing::info!(naver_id = %naver.id, "naver created");
        Ok(naver)
    }
}
