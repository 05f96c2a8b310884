//! Document Types Panel
//!
//! Admin catalog of the document kinds a funding request can carry. Small
//! enough that mutations patch the shared store directly instead of going
//! through a full reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, DocumentTypeDraft};
use crate::components::DeleteConfirmButton;
use crate::models::DocumentType;
use crate::notify::use_notifier;
use crate::store::{
    store_add_document_type, store_remove_document_type, store_update_document_type,
    use_app_store, AppStateStoreFields,
};

/// Inline add row
#[component]
fn DocumentTypeAddInput() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_code, set_new_code) = signal(String::new());
    let (new_required, set_new_required) = signal(false);

    let add_document_type = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let code = new_code.get();
        if name.is_empty() || code.is_empty() {
            return;
        }
        let required = new_required.get();

        let api = api.clone();
        spawn_local(async move {
            let draft = DocumentTypeDraft {
                name: &name,
                code: &code,
                required,
            };
            match api.create_document_type(&draft).await {
                Ok(created) => {
                    store_add_document_type(&store, created);
                    set_new_name.set(String::new());
                    set_new_code.set(String::new());
                    set_new_required.set(false);
                }
                Err(e) => notifier.error(format!("Creating document type failed: {}", e)),
            }
        });
    };

    view! {
        <form class="doc-type-add-form" on:submit=add_document_type>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || new_name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_name.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Code"
                prop:value=move || new_code.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_code.set(input.value());
                }
            />
            <label class="checkbox-row">
                <input
                    type="checkbox"
                    prop:checked=move || new_required.get()
                    on:change=move |_| set_new_required.update(|v| *v = !*v)
                />
                "Required"
            </label>
            <button type="submit">"+"</button>
        </form>
    }
}

#[component]
pub fn DocumentTypesPanel() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let store = use_app_store();

    let row_api = api.clone();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Document Types"</h2>
            </div>

            <DocumentTypeAddInput />

            <For
                each=move || store.document_types().get()
                key=|dt| (dt.id, dt.required)
                children=move |doc_type: DocumentType| {
                    let id = doc_type.id;
                    let name = doc_type.name.clone();
                    let code = doc_type.code.clone();
                    let required = doc_type.required;

                    let toggle_api = row_api.clone();
                    let toggle_name = name.clone();
                    let toggle_code = code.clone();
                    let on_toggle_required = move |_| {
                        let api = toggle_api.clone();
                        let name = toggle_name.clone();
                        let code = toggle_code.clone();
                        spawn_local(async move {
                            let draft = DocumentTypeDraft {
                                name: &name,
                                code: &code,
                                required: !required,
                            };
                            match api.update_document_type(id, &draft).await {
                                Ok(updated) => store_update_document_type(&store, updated),
                                Err(e) => notifier.error(format!("Update failed: {}", e)),
                            }
                        });
                    };

                    let del_api = row_api.clone();
                    let on_delete = Callback::new(move |_| {
                        let api = del_api.clone();
                        spawn_local(async move {
                            match api.delete_document_type(id).await {
                                Ok(()) => store_remove_document_type(&store, id),
                                Err(e) => notifier.error(format!("Delete failed: {}", e)),
                            }
                        });
                    });

                    view! {
                        <div class="doc-type-row">
                            <span class="doc-type-name">{name.clone()}</span>
                            <span class="doc-type-code">{code.clone()}</span>
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=required
                                    on:change=on_toggle_required
                                />
                                "Required"
                            </label>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    }
                }
            />

            {move || store.document_types().get().is_empty().then(|| view! {
                <div class="empty-note">"No document types yet"</div>
            })}
        </div>
    }
}
