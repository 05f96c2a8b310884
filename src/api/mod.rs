//! Backend API Client
//!
//! Thin typed wrappers over the remote HTTP service, organized by domain.
//! Every list endpoint returns rows already sorted in presentation order;
//! every mutation is followed by a client-side reload of the affected list.

mod announcements;
mod auth;
mod budgets;
mod document_types;
mod fund_forms;
mod installments;
mod projects;
mod publications;

use leptos::prelude::*;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;

pub use announcements::AnnouncementDraft;
pub use budgets::BudgetDraft;
pub use document_types::DocumentTypeDraft;
pub use fund_forms::FundFormDraft;
pub use installments::InstallmentPeriodDraft;
pub use projects::ProjectDraft;
pub use publications::PublicationDraft;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Handle to the backend API: base URL plus the in-memory bearer token.
///
/// Cloned freely into async closures; the token signal is shared across all
/// clones so login/logout applies everywhere at once.
#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    base: String,
    token: RwSignal<Option<String>>,
}

impl Api {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config::api_base().to_string(),
            token: RwSignal::new(None),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        self.token.set(token);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = self.token.get_untracked() {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        req
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.execute(self.request(Method::GET, path)).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.execute(self.request(method, path).json(body)).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(method, path).json(body)).await?;
        Ok(())
    }

    async fn delete_path(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Get the API handle from context
pub fn use_api() -> Api {
    expect_context::<Api>()
}
