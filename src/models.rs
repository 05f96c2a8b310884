//! Frontend Models
//!
//! Data structures matching backend records. The backend names identifier
//! fields inconsistently across endpoints (`announcement_id` vs `id`,
//! `fund_form_id` vs `form_id`, camelCase `displayOrder`); serde aliases
//! normalize every row into one shape here, at the API boundary, so nothing
//! downstream branches on field-name variants.

use chrono::NaiveDate;
use leptos_orderable::Orderable;
use serde::{Deserialize, Serialize};

/// Account role, enforced server-side; the client only gates rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Faculty,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Staff => "Staff",
            Role::Faculty => "Faculty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Login response; the token lives in memory for the tab's lifetime only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(alias = "announcement_id")]
    pub id: u32,
    pub title: String,
    pub body: String,
    pub published: bool,
    #[serde(alias = "displayOrder")]
    pub display_order: i32,
}

impl Orderable for Announcement {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundForm {
    #[serde(alias = "fund_form_id", alias = "form_id")]
    pub id: u32,
    pub name: String,
    pub description: String,
    pub file_url: String,
    pub active: bool,
    #[serde(alias = "displayOrder")]
    pub display_order: i32,
}

impl Orderable for FundForm {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Submitted => "Submitted",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Rejected => "Rejected",
        }
    }
}

/// Funding request. Amounts are whole currency units; all monetary
/// calculation (budget checks, balances) happens in the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "project_id")]
    pub id: u32,
    pub title: String,
    pub fund_id: u32,
    pub owner_id: u32,
    pub owner_name: String,
    pub amount: i64,
    pub status: ProjectStatus,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentType {
    #[serde(alias = "document_type_id")]
    pub id: u32,
    pub name: String,
    pub code: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    #[serde(alias = "fund_id")]
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundBudget {
    #[serde(alias = "budget_id")]
    pub id: u32,
    pub fund_id: u32,
    pub year: u16,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPeriod {
    #[serde(alias = "period_id")]
    pub id: u32,
    pub year: u16,
    pub seq: u8,
    pub opens_on: NaiveDate,
    pub closes_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(alias = "publication_id")]
    pub id: u32,
    pub title: String,
    pub venue: String,
    pub year: u16,
    pub citations: u32,
    pub kind: String,
}

/// Thousands-separated display of a whole currency amount.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_id_aliases_normalize() {
        let legacy: Announcement = serde_json::from_str(
            r#"{"announcement_id": 4, "title": "Call open", "body": "", "published": true, "displayOrder": 2}"#,
        )
        .unwrap();
        assert_eq!(legacy.id, 4);
        assert_eq!(legacy.display_order, 2);

        let plain: Announcement = serde_json::from_str(
            r#"{"id": 4, "title": "Call open", "body": "", "published": true, "display_order": 2}"#,
        )
        .unwrap();
        assert_eq!(legacy, plain);
    }

    #[test]
    fn fund_form_id_aliases_normalize() {
        for field in ["id", "form_id", "fund_form_id"] {
            let json = format!(
                r#"{{"{}": 9, "name": "Travel claim", "description": "", "file_url": "/forms/9.pdf", "active": true, "display_order": 1}}"#,
                field
            );
            let form: FundForm = serde_json::from_str(&json).unwrap();
            assert_eq!(form.id, 9);
        }
    }

    #[test]
    fn role_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), r#""faculty""#);
        let role: Role = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(950), "950");
        assert_eq!(format_amount(12500), "12,500");
        assert_eq!(format_amount(1234567), "1,234,567");
        assert_eq!(format_amount(-42000), "-42,000");
    }
}
