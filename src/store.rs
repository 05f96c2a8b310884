//! Shared Reference Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! catalogs several panels read (funds for selectors and budget grouping,
//! document types for request forms).

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DocumentType, Fund};

/// Cross-panel reference data with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fund catalog
    pub funds: Vec<Fund>,
    /// Document type catalog
    pub document_types: Vec<DocumentType>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_funds(store: &AppStore, funds: Vec<Fund>) {
    *store.funds().write() = funds;
}

pub fn store_set_document_types(store: &AppStore, types: Vec<DocumentType>) {
    *store.document_types().write() = types;
}

/// Update a document type in the store by ID
pub fn store_update_document_type(store: &AppStore, updated: DocumentType) {
    store
        .document_types()
        .write()
        .iter_mut()
        .find(|dt| dt.id == updated.id)
        .map(|dt| *dt = updated);
}

/// Remove a document type from the store by ID
pub fn store_remove_document_type(store: &AppStore, id: u32) {
    store.document_types().write().retain(|dt| dt.id != id);
}

/// Add a document type to the store
pub fn store_add_document_type(store: &AppStore, dt: DocumentType) {
    store.document_types().write().push(dt);
}
