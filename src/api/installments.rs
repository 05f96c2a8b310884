//! Installment Period Endpoints

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::InstallmentPeriod;

#[derive(Serialize)]
pub struct InstallmentPeriodDraft {
    pub year: u16,
    pub seq: u8,
    pub opens_on: NaiveDate,
    pub closes_on: NaiveDate,
}

impl Api {
    pub async fn list_installment_periods(
        &self,
        year: u16,
    ) -> Result<Vec<InstallmentPeriod>, ApiError> {
        self.get_json(&format!("/installment-periods?year={}", year))
            .await
    }

    pub async fn create_installment_period(
        &self,
        draft: &InstallmentPeriodDraft,
    ) -> Result<InstallmentPeriod, ApiError> {
        self.send_json(Method::POST, "/installment-periods", draft)
            .await
    }

    pub async fn update_installment_period(
        &self,
        id: u32,
        draft: &InstallmentPeriodDraft,
    ) -> Result<InstallmentPeriod, ApiError> {
        self.send_json(Method::PUT, &format!("/installment-periods/{}", id), draft)
            .await
    }

    pub async fn delete_installment_period(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/installment-periods/{}", id))
            .await
    }
}
