//! Typed records for every collection the console manages.
//!
//! Each entity is a plain serde struct. The serialised JSON form is both the
//! storage format and what the generic search/sort code reads fields from, so
//! field names here are also the dot paths used by tables and forms.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub mod contacts;
pub mod fleet;
pub mod inventory;
pub mod invoices;
pub mod lookups;
pub mod validation;

pub use contacts::{Address, Customer, Lead, LeadStatus, Prospect};
pub use fleet::Vehicle;
pub use inventory::InventoryItem;
pub use invoices::{
    Invoice, InvoiceLine, InvoiceStatus, MAX_LINE_QUANTITY, MAX_UNIT_PRICE,
    lines_total,
};
pub use lookups::{
    Currency, InspectionPointCategory, InspectionPointType, ProposalTemplate,
    Route, ServiceType, TreatmentType, VehicleType, Zone,
};
pub use rust_decimal::Decimal;
pub use validation::FieldErrors;

/// Identifier of a record within its collection.
///
/// Records created by the console get the creation time in milliseconds.
/// Imported data may carry string ids, so both shapes are accepted.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[serde(untagged)]
pub enum RecordId {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl RecordId {
    /// `0` and blank strings are placeholders for "not saved yet".
    pub fn is_assigned(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0,
            Self::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An entity stored as one collection in the key-value store.
pub trait Record:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + 'static
{
    /// Storage slot name, before the configured key prefix is applied.
    const COLLECTION_KEY: &'static str;

    fn id(&self) -> Option<&RecordId>;

    fn set_id(&mut self, id: RecordId);

    /// Field-level checks run before a draft is committed.
    fn validate(&self) -> FieldErrors;

    /// Upgrade a record read in an older shape. Runs on load and when a
    /// record is opened for editing.
    fn migrate(&mut self) {}

    /// Short human label, used in confirmation prompts and logs.
    fn display_name(&self) -> String {
        self.id()
            .map(ToString::to_string)
            .unwrap_or_else(|| "new record".to_string())
    }

    fn has_assigned_id(&self) -> bool {
        self.id().is_some_and(RecordId::is_assigned)
    }
}

/// Implements `Record::id` and `Record::set_id` for structs with an
/// `id: Option<RecordId>` field.
#[macro_export]
macro_rules! id_accessors {
    () => {
        fn id(&self) -> Option<&$crate::RecordId> {
            self.id.as_ref()
        }

        fn set_id(&mut self, id: $crate::RecordId) {
            self.id = Some(id);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() -> anyhow::Result<()> {
        let ids: Vec<RecordId> =
            serde_json::from_str(r#"[1700000000000, "legacy-7"]"#)?;
        assert_eq!(ids[0], RecordId::Number(1_700_000_000_000));
        assert_eq!(ids[1], RecordId::from("legacy-7"));
        assert_eq!(serde_json::to_string(&ids)?, r#"[1700000000000,"legacy-7"]"#);
        Ok(())
    }

    #[test]
    fn test_placeholder_ids_are_unassigned() {
        assert!(!RecordId::Number(0).is_assigned());
        assert!(!RecordId::from("  ").is_assigned());
        assert!(RecordId::Number(2).is_assigned());
        assert!(RecordId::from("a").is_assigned());
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::Number(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }
}
