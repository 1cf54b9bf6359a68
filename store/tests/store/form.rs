use jiff::civil::date;
use records::{
    Customer, InventoryItem, Invoice, InvoiceLine, RecordId, VehicleType,
};
use rust_decimal::Decimal;
use serde_json::json;
use store::{
    Collection, FormLifecycle, FormMode, FormPhase, MemoryStorage,
    SubmitOutcome,
};
use test_helpers::{
    FailingStorage, frozen_clock, init_test_logging, mock, test_config,
};

#[test]
fn new_record_flows_into_collection() -> anyhow::Result<()> {
    let mut types: Collection<VehicleType, _> = Collection::load(
        MemoryStorage::new(),
        frozen_clock(),
        &test_config(),
    );
    let mut form = FormLifecycle::new();
    form.open_new(VehicleType::default());
    assert_eq!(form.mode(), Some(FormMode::New));

    // Blank name is caught before anything is written.
    assert_eq!(form.submit(|d| types.save_item(d)), SubmitOutcome::Invalid);
    assert_eq!(form.errors().get("name"), Some("Name is required"));
    assert!(types.is_empty());

    form.update_field("name", json!("Van"))?;
    form.update_field("active", json!(false))?;
    assert!(form.errors().is_empty());

    assert_eq!(form.submit(|d| types.save_item(d)), SubmitOutcome::Saved);
    assert_eq!(form.phase(), FormPhase::Closed);
    assert_eq!(types.len(), 1);
    assert_eq!(types.items()[0].name, "Van");
    assert!(!types.items()[0].active);
    Ok(())
}

#[test]
fn edit_replaces_existing_record() -> anyhow::Result<()> {
    let config = test_config();
    let mut customers: Collection<Customer, _> = Collection::load(
        mock::seeded_storage(&config)?,
        frozen_clock(),
        &config,
    );
    let ada = customers
        .get(&RecordId::Number(1))
        .cloned()
        .expect("seeded customer");

    let mut form = FormLifecycle::new();
    form.open_edit(ada);
    form.update_field("address.city", json!("Marylebone"))?;
    form.update_field("phone", json!("+442079460958"))?;
    assert_eq!(form.submit(|d| customers.save_item(d)), SubmitOutcome::Saved);

    assert_eq!(customers.len(), 4);
    let ada = &customers.items()[0];
    assert_eq!(ada.address.city, "Marylebone");
    assert_eq!(ada.phone, "+442079460958");
    Ok(())
}

#[test]
fn nested_line_fields_are_validated_by_path() -> anyhow::Result<()> {
    let mut form = FormLifecycle::new();
    form.open_new(Invoice {
        number: "INV-001".into(),
        customer_name: "Ada Lovelace".into(),
        issued_on: Some(date(2025, 3, 1)),
        lines: vec![InvoiceLine {
            description: "Wasp nest removal".into(),
            ..Default::default()
        }],
        ..Default::default()
    });

    assert_eq!(form.begin_save(), None);
    assert!(form.errors().contains("lines.0.quantity"));

    form.update_field("lines.0.quantity", json!(2))?;
    assert!(!form.errors().contains("lines.0.quantity"));
    form.update_field("lines.0.unit_price", json!(45.5))?;
    assert_eq!(form.draft().total(), Some(Decimal::from(91)));

    assert!(form.update_field("lines.0.quantity", json!("two")).is_err());
    assert_eq!(form.errors().get("lines.0.quantity"), Some("Invalid value"));
    assert_eq!(form.begin_save(), None);

    form.update_field("lines.0.quantity", json!(2))?;
    assert!(form.begin_save().is_some());
    Ok(())
}

#[test]
fn cleared_number_is_not_saved_as_the_old_value() -> anyhow::Result<()> {
    let mut form = FormLifecycle::<InventoryItem>::new();
    let item = mock::numbered_inventory(3).remove(2);
    form.open_edit(item);

    // A blank number input arrives as null, which a count cannot hold.
    assert!(form.update_field("quantity", json!(null)).is_err());
    assert_eq!(form.draft().quantity, 3);
    assert_eq!(form.submit(|d| Ok::<_, String>(d)), SubmitOutcome::Invalid);
    assert_eq!(form.errors().get("quantity"), Some("Invalid value"));

    form.update_field("quantity", json!(0))?;
    let saved = form.begin_save().map(|item| item.quantity);
    assert_eq!(saved, Some(0));
    Ok(())
}

#[test]
fn storage_failure_is_reported_on_the_form() -> anyhow::Result<()> {
    init_test_logging();
    let config = test_config();
    let storage = FailingStorage::over(mock::seeded_storage(&config)?);
    let mut customers: Collection<Customer, _> =
        Collection::load(storage.clone(), frozen_clock(), &config);

    let mut form = FormLifecycle::new();
    form.open_new(mock::customer(0, "Mary", "Jackson", "Hampton"));
    assert_eq!(form.submit(|d| customers.save_item(d)), SubmitOutcome::Failed);
    assert_eq!(form.phase(), FormPhase::Open(FormMode::New));
    assert_eq!(
        form.errors().submit(),
        Some("Could not save 'test.customers': quota exceeded")
    );
    assert_eq!(customers.len(), 4);

    // Retrying once storage recovers goes through with the same draft.
    storage.set_failing(false);
    assert_eq!(form.submit(|d| customers.save_item(d)), SubmitOutcome::Saved);
    assert_eq!(customers.len(), 5);
    Ok(())
}

#[tokio::test]
async fn async_commit_failure_sets_submit_error() -> anyhow::Result<()> {
    let mut form = FormLifecycle::new();
    form.open_edit(mock::customer(1, "Ada", "Lovelace", "London"));

    let outcome = form
        .submit_async(|_draft| async { Err::<(), _>("Network unreachable") })
        .await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form.errors().submit(), Some("Network unreachable"));
    assert!(!form.is_saving());

    let outcome = form
        .submit_async(|draft| async move { Ok::<_, String>(draft) })
        .await;
    assert_eq!(outcome, SubmitOutcome::Saved);
    assert!(!form.is_open());
    Ok(())
}
