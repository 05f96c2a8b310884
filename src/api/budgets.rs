//! Fund & Budget Endpoints
//!
//! Funds are the stable catalog; budgets attach an amount to a fund for one
//! fiscal year.

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::{Fund, FundBudget};

#[derive(Serialize)]
pub struct BudgetDraft {
    pub fund_id: u32,
    pub year: u16,
    pub amount: i64,
}

#[derive(Serialize)]
struct AmountPatch {
    amount: i64,
}

impl Api {
    pub async fn list_funds(&self) -> Result<Vec<Fund>, ApiError> {
        self.get_json("/funds").await
    }

    pub async fn list_budgets(&self, year: u16) -> Result<Vec<FundBudget>, ApiError> {
        self.get_json(&format!("/budgets?year={}", year)).await
    }

    pub async fn create_budget(&self, draft: &BudgetDraft) -> Result<FundBudget, ApiError> {
        self.send_json(Method::POST, "/budgets", draft).await
    }

    pub async fn update_budget_amount(&self, id: u32, amount: i64) -> Result<FundBudget, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/budgets/{}", id),
            &AmountPatch { amount },
        )
        .await
    }

    pub async fn delete_budget(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/budgets/{}", id)).await
    }
}
