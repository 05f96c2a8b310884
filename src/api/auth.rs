//! Auth Endpoints
//!
//! Credential exchange only; the session protocol itself is the backend's.

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::Session;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl Api {
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.send_json(Method::POST, "/auth/login", &LoginArgs { email, password })
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "/auth/logout", &()).await
    }
}
