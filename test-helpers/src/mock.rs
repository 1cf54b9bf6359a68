//! Sample data for store tests.
//!
//! The datasets are small but cover the shapes the generic code has to cope
//! with: nested fields, numbers, legacy single-name records and ids written
//! both as numbers and as strings.

use anyhow::Result;
use records::{
    Address, Customer, InventoryItem, Record, RecordId, Vehicle, VehicleType,
};
use rust_decimal::Decimal;
use store::{MemoryStorage, Storage, StoreConfig};

pub fn customer(id: i64, first_name: &str, last_name: &str, city: &str) -> Customer {
    Customer {
        id: Some(RecordId::Number(id)),
        first_name: first_name.into(),
        last_name: last_name.into(),
        address: Address {
            city: city.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer(1, "Ada", "Lovelace", "London"),
        customer(2, "Grace", "Hopper", "New York"),
        customer(3, "Alan", "Turing", "Manchester"),
        Customer {
            email: "kj@example.com".into(),
            phone: "+447700900123".into(),
            ..customer(4, "Katherine", "Johnson", "Leeds")
        },
    ]
}

pub fn vehicle_type(id: i64, name: &str) -> VehicleType {
    VehicleType {
        id: Some(RecordId::Number(id)),
        name: name.into(),
        ..Default::default()
    }
}

pub fn sample_vehicle_types() -> Vec<VehicleType> {
    vec![
        vehicle_type(1, "Van"),
        vehicle_type(2, "Pickup"),
        VehicleType {
            active: false,
            ..vehicle_type(3, "Motorbike")
        },
    ]
}

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: Some(RecordId::Number(1)),
            registration: "AB12 CDE".into(),
            make: "Ford".into(),
            model: "Transit".into(),
            vehicle_type: "Van".into(),
            year: Some(2019),
        },
        Vehicle {
            id: Some(RecordId::Number(2)),
            registration: "XY70 ZZZ".into(),
            make: "Toyota".into(),
            model: "Hilux".into(),
            vehicle_type: "Pickup".into(),
            year: None,
        },
    ]
}

/// `count` numbered items; item `n` has quantity `n` and costs `n` pounds.
pub fn numbered_inventory(count: i64) -> Vec<InventoryItem> {
    (1..=count)
        .map(|n| InventoryItem {
            id: Some(RecordId::Number(n)),
            sku: format!("SKU-{n:03}"),
            name: format!("Item {n}"),
            quantity: n,
            unit_price: Decimal::from(n),
            reorder_level: 5,
        })
        .collect()
}

/// Customers as written before first and last name were split, with a
/// string id from an old import.
pub const LEGACY_CUSTOMERS_JSON: &str = r#"[
    {"id": "import-1", "name": "Marie Salomea Curie", "email": "mc@example.com"},
    {"id": 1700000000000, "name": "Rosalind", "first_name": "", "last_name": ""}
]"#;

/// Write `items` straight into their slot, bypassing any collection.
pub fn seed<R: Record>(
    storage: &impl Storage,
    config: &StoreConfig,
    items: &[R],
) -> Result<()> {
    let encoded = serde_json::to_string(items)?;
    storage.write(&config.slot_for::<R>(), &encoded)?;
    Ok(())
}

/// Fresh memory storage holding the sample customers and vehicle types.
pub fn seeded_storage(config: &StoreConfig) -> Result<MemoryStorage> {
    let storage = MemoryStorage::new();
    seed(&storage, config, &sample_customers())?;
    seed(&storage, config, &sample_vehicle_types())?;
    Ok(storage)
}
