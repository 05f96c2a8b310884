//! Project Endpoints
//!
//! Funding requests. The backend scopes the list to the caller: members see
//! their own requests, administrators see everything.

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::{Project, ProjectStatus};

#[derive(Serialize)]
pub struct ProjectDraft<'a> {
    pub title: &'a str,
    pub fund_id: u32,
    pub amount: i64,
    pub justification: &'a str,
}

#[derive(Serialize)]
struct StatusPatch {
    status: ProjectStatus,
}

impl Api {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects").await
    }

    pub async fn create_project(&self, draft: &ProjectDraft<'_>) -> Result<Project, ApiError> {
        self.send_json(Method::POST, "/projects", draft).await
    }

    pub async fn update_project(
        &self,
        id: u32,
        draft: &ProjectDraft<'_>,
    ) -> Result<Project, ApiError> {
        self.send_json(Method::PUT, &format!("/projects/{}", id), draft)
            .await
    }

    /// Review action; authorization is enforced server-side.
    pub async fn update_project_status(
        &self,
        id: u32,
        status: ProjectStatus,
    ) -> Result<Project, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/projects/{}", id),
            &StatusPatch { status },
        )
        .await
    }

    pub async fn delete_project(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/projects/{}", id)).await
    }
}
