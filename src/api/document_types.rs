//! Document Type Endpoints

use reqwest::Method;
use serde::Serialize;

use super::{Api, ApiError};
use crate::models::DocumentType;

#[derive(Serialize)]
pub struct DocumentTypeDraft<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub required: bool,
}

impl Api {
    pub async fn list_document_types(&self) -> Result<Vec<DocumentType>, ApiError> {
        self.get_json("/document-types").await
    }

    pub async fn create_document_type(
        &self,
        draft: &DocumentTypeDraft<'_>,
    ) -> Result<DocumentType, ApiError> {
        self.send_json(Method::POST, "/document-types", draft).await
    }

    pub async fn update_document_type(
        &self,
        id: u32,
        draft: &DocumentTypeDraft<'_>,
    ) -> Result<DocumentType, ApiError> {
        self.send_json(Method::PUT, &format!("/document-types/{}", id), draft)
            .await
    }

    pub async fn delete_document_type(&self, id: u32) -> Result<(), ApiError> {
        self.delete_path(&format!("/document-types/{}", id)).await
    }
}
