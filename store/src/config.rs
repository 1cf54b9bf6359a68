use records::Record;

pub const DEFAULT_KEY_PREFIX: &str = "fieldbook.";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_COUNTRY_CODE: &str = "44";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prepended to every collection key to namespace the storage slots.
    pub key_prefix: String,
    /// Rows per table page when a table does not pick its own size.
    pub default_page_size: usize,
    /// Country code used to turn national phone numbers into E.164.
    pub default_country_code: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Storage slot holding the collection for `R`.
    pub fn slot_for<R: Record>(&self) -> String {
        format!("{}{}", self.key_prefix, R::COLLECTION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::{Customer, VehicleType};

    #[test]
    fn test_slots_are_prefixed() {
        let config = StoreConfig::default();
        assert_eq!(config.slot_for::<Customer>(), "fieldbook.customers");

        let config = StoreConfig {
            key_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(config.slot_for::<VehicleType>(), "vehicle_types");
    }
}
