//! UI Components
//!
//! Leptos components: page shell, route guard, and the feature panels.

mod announcements_panel;
mod boards;
mod delete_confirm_button;
mod document_types_panel;
mod fund_budget_panel;
mod fund_forms_panel;
mod installment_panel;
mod login_form;
mod modal;
mod profile_panel;
mod projects_panel;
mod route_guard;
mod shell;
mod toast;
mod year_copy_wizard;
mod year_tab_bar;

pub use announcements_panel::AnnouncementsPanel;
pub use boards::{AnnouncementBoard, FundFormBoard};
pub use delete_confirm_button::DeleteConfirmButton;
pub use document_types_panel::DocumentTypesPanel;
pub use fund_budget_panel::FundBudgetPanel;
pub use fund_forms_panel::FundFormsPanel;
pub use installment_panel::InstallmentPanel;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use profile_panel::ProfilePanel;
pub use projects_panel::ProjectsPanel;
pub use route_guard::RequireRole;
pub use shell::Shell;
pub use toast::ToastStack;
pub use year_copy_wizard::YearCopyWizard;
pub use year_tab_bar::YearTabBar;
