//! Onboarding payload types

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Services a client can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// All services in display order
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UiUx => "UI/UX",
            Self::Branding => "Branding",
            Self::WebDev => "Web Dev",
            Self::MobileApp => "Mobile App",
        }
    }

    /// Look up a service by its wire label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one of the onboarding fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// Fields in declaration order; errors are reported in this order
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::CompanyName,
        Field::Services,
        Field::BudgetUsd,
        Field::ProjectStartDate,
        Field::AcceptTerms,
    ];

    /// JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Services => "services",
            Self::BudgetUsd => "budgetUsd",
            Self::ProjectStartDate => "projectStartDate",
            Self::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validated onboarding submission.
///
/// Only [`crate::schema::validate`] builds one, so every instance has passed
/// all field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_usd: Option<u32>,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

impl FormData {
    /// Services joined for display, e.g. "UI/UX, Branding"
    pub fn services_display(&self) -> String {
        self.services
            .iter()
            .map(Service::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
