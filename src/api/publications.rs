//! Publication Endpoints
//!
//! Publications belong to the authenticated user's profile.

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::Publication;

#[derive(Serialize)]
pub struct PublicationDraft<'a> {
    pub title: &'a str,
    pub venue: &'a str,
    pub year: u16,
    pub citations: u32,
    pub kind: &'a str,
}

impl Api {
    pub async fn list_my_publications(&self) -> Result<Vec<Publication>, ApiError> {
        self.get_json("/profile/publications").await
    }

    pub async fn create_publication(
        &self,
        draft: &PublicationDraft<'_>,
    ) -> Result<Publication, ApiError> {
        self.send_json(Method::POST, "/profile/publications", draft)
            .await
    }

    pub async fn delete_publication(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/profile/publications/{}", id))
            .await
    }
}
