//! Fund Form Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::FundForm;

#[derive(Serialize)]
pub struct FundFormDraft<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub file_url: &'a str,
    pub active: bool,
}

#[derive(Serialize)]
struct OrderPatch {
    display_order: i32,
}

impl Api {
    /// Rows arrive sorted by `display_order` ascending.
    pub async fn list_fund_forms(&self) -> Result<Vec<FundForm>, ApiError> {
        self.get_json("/fund-forms").await
    }

    pub async fn create_fund_form(&self, draft: &FundFormDraft<'_>) -> Result<FundForm, ApiError> {
        self.send_json(Method::POST, "/fund-forms", draft).await
    }

    pub async fn update_fund_form(
        &self,
        id: u32,
        draft: &FundFormDraft<'_>,
    ) -> Result<FundForm, ApiError> {
        self.send_json(Method::PUT, &format!("/fund-forms/{}", id), draft)
            .await
    }

    pub async fn delete_fund_form(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/fund-forms/{}", id)).await
    }

    pub async fn update_fund_form_order(&self, id: u32, display_order: i32) -> Result<(), ApiError> {
        self.send_unit(
            Method::PATCH,
            &format!("/fund-forms/{}", id),
            &OrderPatch { display_order },
        )
        .await
    }
}
