use std::cell::RefCell;

use jiff::Span;
use records::{Customer, InventoryItem, Record, RecordId, VehicleType};
use store::{Collection, CollectionError, MemoryStorage, Removal, StorageError};
use test_helpers::mock::{self, LEGACY_CUSTOMERS_JSON};
use test_helpers::{
    FailingStorage, RecordingStorage, frozen_clock, init_test_logging,
    test_config,
};

fn always(answer: bool) -> impl Fn(&str) -> bool {
    move |_: &str| answer
}

#[test]
fn save_without_id_appends_with_fresh_id() -> anyhow::Result<()> {
    init_test_logging();
    let config = test_config();
    let storage = MemoryStorage::new();
    mock::seed(
        &storage,
        &config,
        &[mock::vehicle_type(1, "A"), mock::vehicle_type(2, "B")],
    )?;
    let mut types: Collection<VehicleType, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    assert_eq!(types.len(), 2);

    let saved = types.save_item(VehicleType {
        name: "New".into(),
        ..Default::default()
    })?;

    assert_eq!(types.len(), 3);
    let id = saved.id.clone().expect("saved record has an id");
    assert!(id.is_assigned());
    assert_ne!(id, RecordId::Number(1));
    assert_ne!(id, RecordId::Number(2));
    assert_eq!(types.items()[2], saved);

    // The slot holds exactly the in-memory list.
    let stored: Vec<VehicleType> = serde_json::from_str(
        &storage
            .slot("test.vehicle_types")
            .expect("slot was written"),
    )?;
    assert_eq!(stored, types.items());
    Ok(())
}

#[test]
fn ids_are_creation_millis_and_unique() -> anyhow::Result<()> {
    let clock = frozen_clock();
    let mut types: Collection<VehicleType, _> =
        Collection::load(MemoryStorage::new(), clock.clone(), &test_config());

    let first = types.save_item(mock::vehicle_type(0, "Van"))?;
    let second = types.save_item(mock::vehicle_type(0, "Pickup"))?;
    let millis = test_helpers::FROZEN_AT.as_millisecond();
    assert_eq!(first.id, Some(RecordId::Number(millis)));
    assert_eq!(second.id, Some(RecordId::Number(millis + 1)));

    clock.advance(Span::new().seconds(1));
    let third = types.save_item(mock::vehicle_type(0, "Motorbike"))?;
    assert_eq!(third.id, Some(RecordId::Number(millis + 1000)));
    Ok(())
}

#[test]
fn save_with_existing_id_replaces_in_place() -> anyhow::Result<()> {
    let config = test_config();
    let storage = mock::seeded_storage(&config)?;
    let mut customers: Collection<Customer, _> =
        Collection::load(storage, frozen_clock(), &config);
    let before = customers.len();

    let mut grace = customers
        .get(&RecordId::Number(2))
        .cloned()
        .expect("seeded customer");
    grace.notes = "Prefers morning visits".into();
    customers.save_item(grace.clone())?;

    assert_eq!(customers.len(), before);
    assert_eq!(customers.items()[1], grace);
    assert_eq!(
        customers
            .items()
            .iter()
            .filter(|c| c.id == grace.id)
            .count(),
        1
    );
    Ok(())
}

#[test]
fn unknown_assigned_id_is_inserted() -> anyhow::Result<()> {
    let mut types: Collection<VehicleType, _> = Collection::load(
        MemoryStorage::new(),
        frozen_clock(),
        &test_config(),
    );
    let saved = types.save_item(VehicleType {
        id: Some("imported-9".into()),
        name: "Truck".into(),
        ..Default::default()
    })?;
    assert_eq!(saved.id, Some(RecordId::from("imported-9")));
    assert_eq!(types.len(), 1);
    Ok(())
}

#[test]
fn remove_requires_confirmation() -> anyhow::Result<()> {
    init_test_logging();
    let config = test_config();
    let storage = RecordingStorage::over(mock::seeded_storage(&config)?);
    let mut customers: Collection<Customer, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    let id = RecordId::Number(3);

    assert_eq!(customers.remove_item(&id, &always(false))?, Removal::Declined);
    assert_eq!(customers.len(), 4);
    assert_eq!(storage.write_count(), 0);

    let prompt = RefCell::new(String::new());
    let removal = customers.remove_item(&id, &|p: &str| {
        *prompt.borrow_mut() = p.to_string();
        true
    });
    assert_eq!(removal?, Removal::Removed);
    assert_eq!(*prompt.borrow(), "Delete Alan Turing? This cannot be undone.");
    assert_eq!(customers.len(), 3);
    assert!(customers.get(&id).is_none());
    assert_eq!(storage.writes(), ["test.customers"]);

    assert_eq!(customers.remove_item(&id, &always(true))?, Removal::NotFound);
    assert_eq!(storage.write_count(), 1);
    Ok(())
}

#[test]
fn failed_write_leaves_collection_unchanged() -> anyhow::Result<()> {
    init_test_logging();
    let config = test_config();
    let storage = FailingStorage::over(mock::seeded_storage(&config)?);
    let mut customers: Collection<Customer, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    let before = customers.clone();
    let slot_before = storage.inner().slot("test.customers");

    let result = customers.save_item(mock::customer(0, "Mary", "Jackson", "York"));
    assert!(matches!(
        result,
        Err(CollectionError::Storage(StorageError::Write { .. }))
    ));
    assert_eq!(customers, before);

    let result = customers.remove_item(&RecordId::Number(1), &always(true));
    assert!(result.is_err());
    assert_eq!(customers, before);
    assert_eq!(storage.inner().slot("test.customers"), slot_before);

    storage.set_failing(false);
    customers.remove_item(&RecordId::Number(1), &always(true))?;
    assert_eq!(customers.len(), 3);
    Ok(())
}

#[test]
fn load_migrates_legacy_names() -> anyhow::Result<()> {
    let config = test_config();
    let storage =
        MemoryStorage::new().with_slot("test.customers", LEGACY_CUSTOMERS_JSON);
    let customers: Collection<Customer, _> =
        Collection::load(storage, frozen_clock(), &config);

    let marie = &customers.items()[0];
    assert_eq!(marie.id, Some(RecordId::from("import-1")));
    assert_eq!(marie.first_name, "Marie");
    assert_eq!(marie.last_name, "Salomea Curie");
    assert_eq!(marie.name, None);
    assert_eq!(marie.display_name(), "Marie Salomea Curie");

    let rosalind = &customers.items()[1];
    assert_eq!(rosalind.first_name, "Rosalind");
    assert_eq!(rosalind.last_name, "");
    Ok(())
}

#[test]
fn unreadable_or_empty_slot_loads_empty() {
    init_test_logging();
    let config = test_config();
    let storage = MemoryStorage::new()
        .with_slot("test.inventory", "{not json")
        .with_slot("test.vehicle_types", "{\"name\": \"Van\"}");

    let inventory: Collection<InventoryItem, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    assert!(inventory.is_empty());

    let types: Collection<VehicleType, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    assert!(types.is_empty());

    let customers: Collection<Customer, _> =
        Collection::load(storage, frozen_clock(), &config);
    assert!(customers.is_empty());
}

#[test]
fn reload_sees_writes_from_other_handles() -> anyhow::Result<()> {
    let config = test_config();
    let storage = MemoryStorage::new();
    let mut tab_a: Collection<InventoryItem, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);
    let mut tab_b: Collection<InventoryItem, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);

    for item in mock::numbered_inventory(3) {
        tab_a.save_item(item)?;
    }
    assert!(tab_b.is_empty());

    tab_b.reload();
    assert_eq!(tab_b.items(), tab_a.items());

    // Last writer wins: B's write drops whatever A added since B loaded.
    tab_a.save_item(InventoryItem {
        sku: "SKU-X".into(),
        name: "Glue board".into(),
        ..Default::default()
    })?;
    tab_b.remove_item(&RecordId::Number(1), &always(true))?;
    tab_a.reload();
    assert_eq!(tab_a.len(), 2);
    Ok(())
}
