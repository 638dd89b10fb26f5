//! Wire types exchanged with the Navedex API

use serde::{Deserialize, Serialize};

/// Authenticated session returned by `POST /users/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub token: String,
}

/// Body of `POST /navers`; dates are `dd-MM-yyyy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNaverRequest {
    pub job_role: String,
    pub birthdate: String,
    pub admission_date: String,
    pub project: String,
    pub name: String,
    pub url: String,
}

/// A stored naver as echoed by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naver {
    pub id: String,
    pub name: String,
    pub job_role: String,
    pub birthdate: String,
    pub admission_date: String,
    pub project: String,
    pub url: String,
}
