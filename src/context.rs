//! Application Context
//!
//! Shared navigation and reload state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Role;

/// Content sections reachable from the side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Announcements,
    FundForms,
    Projects,
    Budgets,
    Installments,
    DocumentTypes,
    Profile,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Announcements,
        Section::FundForms,
        Section::Projects,
        Section::Budgets,
        Section::Installments,
        Section::DocumentTypes,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Announcements => "Announcements",
            Section::FundForms => "Fund Forms",
            Section::Projects => "Projects",
            Section::Budgets => "Budgets",
            Section::Installments => "Installments",
            Section::DocumentTypes => "Document Types",
            Section::Profile => "Profile",
        }
    }

    /// Whether the side nav offers this section to the given visitor.
    /// Rendering is additionally gated by `RequireRole`; the backend is the
    /// actual authorization authority.
    pub fn visible_to(self, role: Option<Role>) -> bool {
        match self {
            Section::Announcements | Section::FundForms => true,
            Section::Projects | Section::Profile => role.is_some(),
            Section::Budgets | Section::Installments | Section::DocumentTypes => {
                role == Some(Role::Admin)
            }
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently displayed section - read
    pub section: ReadSignal<Section>,
    set_section: WriteSignal<Section>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        section: (ReadSignal<Section>, WriteSignal<Section>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            section: section.0,
            set_section: section.1,
        }
    }

    /// Trigger a reload of every mounted list. Called after any successful
    /// mutation (reload-after-write policy).
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn go_to(&self, section: Section) {
        self.set_section.set(section);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
