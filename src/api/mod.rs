//! Navedex API access
//!
//! The remote capabilities the submission pipelines depend on are expressed
//! as traits so they can be mocked; [`ApiClient`] implements them over HTTP.

mod client;
mod error;
mod traits;
mod types;

pub use client::ApiClient;
pub use traits::{AuthService, NaverService};
pub use types::{CreateNaverRequest, Naver, Session};

#[cfg(test)]
pub use error::ApiError;
#[cfg(test)]
pub use traits::{MockAuthService, MockNaverService};
