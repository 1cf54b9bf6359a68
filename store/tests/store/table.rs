use records::{Customer, InventoryItem, VehicleType};
use store::{SortDirection, TableController, search_records};
use test_helpers::mock;

fn first_names(rows: &[Customer]) -> Vec<&str> {
    rows.iter().map(|c| c.first_name.as_str()).collect()
}

#[test]
fn search_then_sort_then_page() {
    let customers = mock::sample_customers();
    let mut table = TableController::new("last_name", SortDirection::Ascending, 2);

    let found = search_records(&customers, &["first_name", "address.city"], "A");
    // Ada, Grace, Alan, Katherine all contain an "a" somewhere.
    assert_eq!(found.total, 4);

    let view = table.view(&found.items);
    assert_eq!(view.total_pages, 2);
    assert_eq!(first_names(&view.rows), ["Grace", "Katherine"]);

    table.set_page(2);
    assert_eq!(first_names(&table.view(&found.items).rows), ["Ada", "Alan"]);

    // Narrowing the search pulls the page back in range.
    let found = search_records(&customers, &["address.city"], "york");
    let view = table.view(&found.items);
    assert_eq!(view.current_page, 1);
    assert_eq!(first_names(&view.rows), ["Grace"]);
}

#[test]
fn lookup_table_toggles_on_name() {
    let types = vec![mock::vehicle_type(1, "A"), mock::vehicle_type(2, "B")];
    let found = search_records(&types, &["name"], "a");
    assert_eq!(found.items, vec![mock::vehicle_type(1, "A")]);

    let mut table = TableController::new("name", SortDirection::Ascending, 10);
    let names = |rows: &[VehicleType]| {
        rows.iter().map(|t| t.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&table.view(&types).rows), ["A", "B"]);
    table.sort_by("name");
    assert_eq!(names(&table.view(&types).rows), ["B", "A"]);
}

#[test]
fn empty_collection_renders_one_empty_page() {
    let mut table = TableController::new("name", SortDirection::Ascending, 10);
    let view = table.view::<VehicleType>(&[]);
    assert_eq!((view.current_page, view.total_pages), (1, 1));
    assert!(view.rows.is_empty());
}

#[test]
fn money_sorts_numerically() {
    let items = mock::numbered_inventory(12);
    let mut table = TableController::new("unit_price", SortDirection::Descending, 5);
    let view = table.view(&items);
    let skus: Vec<&str> = view.rows.iter().map(|i| i.sku.as_str()).collect();
    assert_eq!(skus, ["SKU-012", "SKU-011", "SKU-010", "SKU-009", "SKU-008"]);
    assert_eq!(view.total_pages, 3);

    table.set_page(3);
    let view: store::TableView<InventoryItem> = table.view(&items);
    assert_eq!(view.rows.len(), 2);
    assert_eq!((view.first_row_number(), view.last_row_number()), (11, 12));
}
