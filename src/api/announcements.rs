//! Announcement Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::Announcement;

#[derive(Serialize)]
pub struct AnnouncementDraft<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub published: bool,
}

#[derive(Serialize)]
struct OrderPatch {
    display_order: i32,
}

impl Api {
    /// Rows arrive sorted by `display_order` ascending.
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        self.get_json("/announcements").await
    }

    pub async fn create_announcement(
        &self,
        draft: &AnnouncementDraft<'_>,
    ) -> Result<Announcement, ApiError> {
        self.send_json(Method::POST, "/announcements", draft).await
    }

    pub async fn update_announcement(
        &self,
        id: u32,
        draft: &AnnouncementDraft<'_>,
    ) -> Result<Announcement, ApiError> {
        self.send_json(Method::PUT, &format!("/announcements/{}", id), draft)
            .await
    }

    pub async fn delete_announcement(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/announcements/{}", id)).await
    }

    /// Single-field order update targeting one row; order persistence sends
    /// one of these per row, concurrently.
    pub async fn update_announcement_order(
        &self,
        id: u32,
        display_order: i32,
    ) -> Result<(), ApiError> {
        self.send_unit(
            Method::PATCH,
            &format!("/announcements/{}", id),
            &OrderPatch { display_order },
        )
        .await
    }
}
