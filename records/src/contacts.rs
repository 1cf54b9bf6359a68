//! People and organisations the business deals with: customers, leads and
//! prospects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Record, RecordId, id_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub notes: String,
    /// Single name field written by older versions. Read, never written.
    #[serde(skip_serializing)]
    pub name: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

impl Record for Customer {
    const COLLECTION_KEY: &'static str = "customers";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name");
        errors.require("last_name", &self.last_name, "Last name");
        errors.check_email("email", &self.email);
        errors.check_phone("phone", &self.phone);
        errors
    }

    fn migrate(&mut self) {
        if let Some(name) = self.name.take() {
            migrate_legacy_name(&name, &mut self.first_name, &mut self.last_name);
        }
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
}

impl LeadStatus {
    pub const ALL: [&'static str; 4] = ["new", "contacted", "qualified", "lost"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Where the lead came from (referral, website, door-to-door, ...).
    pub source: String,
    pub status: LeadStatus,
    #[serde(skip_serializing)]
    pub name: Option<String>,
}

impl Record for Lead {
    const COLLECTION_KEY: &'static str = "leads";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name");
        errors.require("last_name", &self.last_name, "Last name");
        errors.check_email("email", &self.email);
        errors.check_phone("phone", &self.phone);
        errors
    }

    fn migrate(&mut self) {
        if let Some(name) = self.name.take() {
            migrate_legacy_name(&name, &mut self.first_name, &mut self.last_name);
        }
    }

    fn display_name(&self) -> String {
        join_name(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prospect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub estimated_value: Option<Decimal>,
}

impl Record for Prospect {
    const COLLECTION_KEY: &'static str = "prospects";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("company", &self.company, "Company");
        errors.require("contact_name", &self.contact_name, "Contact name");
        errors.check_email("email", &self.email);
        errors.check_phone("phone", &self.phone);
        if self.estimated_value.is_some_and(|v| v < Decimal::ZERO) {
            errors.insert(
                "estimated_value",
                "Estimated value cannot be negative",
            );
        }
        errors
    }

    fn display_name(&self) -> String {
        self.company.clone()
    }
}

/// Split a legacy single-field name into first and last name. Existing
/// first/last values win over the legacy field.
fn migrate_legacy_name(name: &str, first: &mut String, last: &mut String) {
    if !first.is_empty() || !last.is_empty() {
        return;
    }
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((head, tail)) => {
            *first = head.to_string();
            *last = tail.trim().to_string();
        }
        None => *first = name.to_string(),
    }
}

fn join_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}
