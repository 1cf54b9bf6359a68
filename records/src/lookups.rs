//! Configuration lookup tables.
//!
//! Most of them are a name with an optional description and an active
//! flag; those are generated by `lookup_record!`. The rest carry a few extra
//! fields and are written out by hand.
//!
//! `Route::zone_name` and `InspectionPointType::category_name` refer to other
//! lookups by name. Nothing checks that the referenced name still exists.

use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Record, RecordId, id_accessors};

macro_rules! lookup_record {
    ($(#[$meta:meta])* $name:ident, $key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<RecordId>,
            pub name: String,
            pub description: String,
            pub active: bool,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    id: None,
                    name: String::new(),
                    description: String::new(),
                    active: true,
                }
            }
        }

        impl Record for $name {
            const COLLECTION_KEY: &'static str = $key;

            id_accessors!();

            fn validate(&self) -> FieldErrors {
                let mut errors = FieldErrors::new();
                errors.require("name", &self.name, "Name");
                errors
            }

            fn display_name(&self) -> String {
                self.name.clone()
            }
        }
    };
}

lookup_record!(
    /// Kind of vehicle in the fleet (van, pickup, ...).
    VehicleType,
    "vehicle_types"
);
lookup_record!(
    /// Service offered to customers (inspection, treatment, exclusion, ...).
    ServiceType,
    "service_types"
);
lookup_record!(TreatmentType, "treatment_types");
lookup_record!(
    /// Geographic area that routes are planned in.
    Zone,
    "zones"
);
lookup_record!(InspectionPointCategory, "inspection_point_categories");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// ISO 4217 code, e.g. `GBP`.
    pub code: String,
    pub name: String,
    pub symbol: String,
}

impl Record for Currency {
    const COLLECTION_KEY: &'static str = "currencies";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.code.len() != 3
            || !self.code.chars().all(|c| c.is_ascii_uppercase())
        {
            errors.insert(
                "code",
                "Currency code must be three uppercase letters, e.g. GBP",
            );
        }
        errors.require("name", &self.name, "Name");
        errors.require("symbol", &self.symbol, "Symbol");
        errors
    }

    fn display_name(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub zone_name: String,
    pub active: bool,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            zone_name: String::new(),
            active: true,
        }
    }
}

impl Record for Route {
    const COLLECTION_KEY: &'static str = "routes";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name");
        errors.require("zone_name", &self.zone_name, "Zone");
        errors
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionPointType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub category_name: String,
    pub active: bool,
}

impl Default for InspectionPointType {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category_name: String::new(),
            active: true,
        }
    }
}

impl Record for InspectionPointType {
    const COLLECTION_KEY: &'static str = "inspection_point_types";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name");
        errors.require("category_name", &self.category_name, "Category");
        errors
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Reusable text for proposals sent to prospects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub subject: String,
    pub body: String,
}

impl Record for ProposalTemplate {
    const COLLECTION_KEY: &'static str = "proposal_templates";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name");
        errors.require("subject", &self.subject, "Subject");
        errors.require("body", &self.body, "Body");
        errors
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_default_to_active() -> anyhow::Result<()> {
        assert!(VehicleType::default().active);
        assert!(Route::default().active);

        // Older rows were written without the flag.
        let zone: Zone = serde_json::from_str(r#"{"id": 3, "name": "North"}"#)?;
        assert!(zone.active);
        assert_eq!(zone.id, Some(RecordId::Number(3)));
        Ok(())
    }

    #[test]
    fn test_lookup_requires_name() {
        let errors = TreatmentType::default().validate();
        assert_eq!(errors.get("name"), Some("Name is required"));

        let service = ServiceType {
            name: "Termite inspection".into(),
            ..Default::default()
        };
        assert!(service.validate().is_empty());
        assert_eq!(service.display_name(), "Termite inspection");
    }

    #[test]
    fn test_currency_code() {
        let mut currency = Currency {
            code: "gbp".into(),
            name: "Pound sterling".into(),
            symbol: "£".into(),
            ..Default::default()
        };
        assert!(currency.validate().contains("code"));
        currency.code = "GBP".into();
        assert!(currency.validate().is_empty());
    }

    #[test]
    fn test_references_by_name_are_required() {
        let route = Route {
            name: "Monday north".into(),
            ..Default::default()
        };
        assert_eq!(route.validate().get("zone_name"), Some("Zone is required"));

        let point = InspectionPointType {
            name: "Bait station".into(),
            category_name: "Exterior".into(),
            ..Default::default()
        };
        assert!(point.validate().is_empty());
    }

    #[test]
    fn test_collection_keys_are_distinct() {
        let keys = [
            VehicleType::COLLECTION_KEY,
            ServiceType::COLLECTION_KEY,
            TreatmentType::COLLECTION_KEY,
            Zone::COLLECTION_KEY,
            InspectionPointCategory::COLLECTION_KEY,
            Currency::COLLECTION_KEY,
            Route::COLLECTION_KEY,
            InspectionPointType::COLLECTION_KEY,
            ProposalTemplate::COLLECTION_KEY,
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
