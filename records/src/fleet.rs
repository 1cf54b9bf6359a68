use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Record, RecordId, id_accessors};

pub const VEHICLE_YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// A service vehicle. `vehicle_type` holds the name of a `VehicleType`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub registration: String,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    pub year: Option<i32>,
}

impl Record for Vehicle {
    const COLLECTION_KEY: &'static str = "vehicles";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("registration", &self.registration, "Registration");
        errors.require("make", &self.make, "Make");
        if let Some(year) = self.year
            && !VEHICLE_YEAR_RANGE.contains(&year)
        {
            errors.insert("year", "Year must be between 1900 and 2100");
        }
        errors
    }

    fn display_name(&self) -> String {
        self.registration.clone()
    }
}
