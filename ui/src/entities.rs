//! Presentation metadata for every entity: which columns a table shows,
//! which fields search looks at and how the add/edit form is laid out.
//!
//! Field paths are the dot paths into a record's JSON form, the same ones
//! validation reports errors under.

use records::{
    Currency, Customer, Decimal, InspectionPointCategory, InspectionPointType,
    InventoryItem, Invoice, InvoiceStatus, Lead, LeadStatus, Prospect,
    ProposalTemplate, Record, Route, ServiceType, TreatmentType, Vehicle,
    VehicleType, Zone,
};
use store::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
    /// Computed by `EntityView::derived_cell` rather than read from the
    /// record; not sortable.
    pub derived: bool,
}

const fn col(field: &'static str, label: &'static str) -> Column {
    Column {
        field,
        label,
        derived: false,
    }
}

const fn derived(field: &'static str, label: &'static str) -> Column {
    Column {
        field,
        label,
        derived: true,
    }
}

/// Two decimal places, or a dash when the amount overflowed.
pub fn format_money(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| "—".to_string(), |a| a.round_dp(2).to_string())
}

/// Another collection whose records a field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTo {
    Customers,
    VehicleTypes,
    Zones,
    InspectionPointCategories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    /// Normalised to E.164 when the input loses focus.
    Phone,
    Integer,
    Decimal,
    Date,
    Bool,
    Select(&'static [&'static str]),
    /// Free-text reference by display name, picked from another collection.
    Reference(ReferenceTo),
    /// The invoice line editor.
    LineItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(
    path: &'static str,
    label: &'static str,
    kind: FieldKind,
) -> FormField {
    FormField { path, label, kind }
}

pub trait EntityView: Record + std::fmt::Debug {
    /// Plural, used for the page heading and navigation.
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const COLUMNS: &'static [Column];
    const SEARCH_FIELDS: &'static [&'static str];
    const FORM_FIELDS: &'static [FormField];
    const DEFAULT_SORT: &'static str;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Ascending;
    /// Falls back to the configured default page size.
    const PAGE_SIZE: Option<usize> = None;

    /// Starting point for "Add".
    fn new_draft() -> Self {
        Self::default()
    }

    /// Text for a `derived` column.
    fn derived_cell(&self, _field: &str) -> Option<String> {
        None
    }
}

const NAME_DESCRIPTION_ACTIVE: &[FormField] = &[
    field("name", "Name", FieldKind::Text),
    field("description", "Description", FieldKind::TextArea),
    field("active", "Active", FieldKind::Bool),
];

const NAME_ACTIVE_COLUMNS: &[Column] = &[
    col("name", "Name"),
    col("description", "Description"),
    col("active", "Active"),
];

macro_rules! lookup_view {
    ($ty:ty, $title:literal, $singular:literal) => {
        impl EntityView for $ty {
            const TITLE: &'static str = $title;
            const SINGULAR: &'static str = $singular;
            const COLUMNS: &'static [Column] = NAME_ACTIVE_COLUMNS;
            const SEARCH_FIELDS: &'static [&'static str] =
                &["name", "description"];
            const FORM_FIELDS: &'static [FormField] = NAME_DESCRIPTION_ACTIVE;
            const DEFAULT_SORT: &'static str = "name";
        }
    };
}

lookup_view!(VehicleType, "Vehicle types", "vehicle type");
lookup_view!(ServiceType, "Service types", "service type");
lookup_view!(TreatmentType, "Treatment types", "treatment type");
lookup_view!(Zone, "Zones", "zone");
lookup_view!(
    InspectionPointCategory,
    "Inspection point categories",
    "inspection point category"
);

impl EntityView for Customer {
    const TITLE: &'static str = "Customers";
    const SINGULAR: &'static str = "customer";
    const COLUMNS: &'static [Column] = &[
        col("last_name", "Last name"),
        col("first_name", "First name"),
        col("email", "Email"),
        col("phone", "Phone"),
        col("address.city", "City"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "address.city",
        "address.postal_code",
    ];
    const FORM_FIELDS: &'static [FormField] = &[
        field("first_name", "First name", FieldKind::Text),
        field("last_name", "Last name", FieldKind::Text),
        field("email", "Email", FieldKind::Email),
        field("phone", "Phone", FieldKind::Phone),
        field("address.street", "Street", FieldKind::Text),
        field("address.city", "City", FieldKind::Text),
        field("address.postal_code", "Postal code", FieldKind::Text),
        field("notes", "Notes", FieldKind::TextArea),
    ];
    const DEFAULT_SORT: &'static str = "last_name";
}

impl EntityView for Lead {
    const TITLE: &'static str = "Leads";
    const SINGULAR: &'static str = "lead";
    const COLUMNS: &'static [Column] = &[
        col("last_name", "Last name"),
        col("first_name", "First name"),
        col("source", "Source"),
        col("status", "Status"),
        col("phone", "Phone"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "email", "phone", "source", "status"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("first_name", "First name", FieldKind::Text),
        field("last_name", "Last name", FieldKind::Text),
        field("email", "Email", FieldKind::Email),
        field("phone", "Phone", FieldKind::Phone),
        field("source", "Source", FieldKind::Text),
        field("status", "Status", FieldKind::Select(&LeadStatus::ALL)),
    ];
    const DEFAULT_SORT: &'static str = "last_name";
}

impl EntityView for Prospect {
    const TITLE: &'static str = "Prospects";
    const SINGULAR: &'static str = "prospect";
    const COLUMNS: &'static [Column] = &[
        col("company", "Company"),
        col("contact_name", "Contact"),
        col("phone", "Phone"),
        col("estimated_value", "Estimated value"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] =
        &["company", "contact_name", "email", "phone"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("company", "Company", FieldKind::Text),
        field("contact_name", "Contact name", FieldKind::Text),
        field("email", "Email", FieldKind::Email),
        field("phone", "Phone", FieldKind::Phone),
        field("estimated_value", "Estimated value", FieldKind::Decimal),
    ];
    const DEFAULT_SORT: &'static str = "company";
}

impl EntityView for InventoryItem {
    const TITLE: &'static str = "Inventory";
    const SINGULAR: &'static str = "inventory item";
    const COLUMNS: &'static [Column] = &[
        col("sku", "SKU"),
        col("name", "Name"),
        col("quantity", "Quantity"),
        col("unit_price", "Unit price"),
        col("reorder_level", "Reorder at"),
        derived("stock_value", "Stock value"),
        derived("reorder", ""),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["sku", "name"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("sku", "SKU", FieldKind::Text),
        field("name", "Name", FieldKind::Text),
        field("quantity", "Quantity", FieldKind::Integer),
        field("unit_price", "Unit price", FieldKind::Decimal),
        field("reorder_level", "Reorder level", FieldKind::Integer),
    ];
    const DEFAULT_SORT: &'static str = "name";
    const PAGE_SIZE: Option<usize> = Some(20);

    fn derived_cell(&self, field: &str) -> Option<String> {
        match field {
            "stock_value" => Some(format_money(self.stock_value())),
            "reorder" => self.needs_reorder().then(|| "Reorder".to_string()),
            _ => None,
        }
    }
}

impl EntityView for Invoice {
    const TITLE: &'static str = "Invoices";
    const SINGULAR: &'static str = "invoice";
    const COLUMNS: &'static [Column] = &[
        col("number", "Number"),
        col("customer_name", "Customer"),
        col("issued_on", "Issued"),
        col("due_on", "Due"),
        col("status", "Status"),
        derived("total", "Total"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] =
        &["number", "customer_name", "status"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("number", "Invoice number", FieldKind::Text),
        field(
            "customer_name",
            "Customer",
            FieldKind::Reference(ReferenceTo::Customers),
        ),
        field("issued_on", "Issued on", FieldKind::Date),
        field("due_on", "Due on", FieldKind::Date),
        field("status", "Status", FieldKind::Select(&InvoiceStatus::ALL)),
        field("lines", "Lines", FieldKind::LineItems),
    ];
    const DEFAULT_SORT: &'static str = "issued_on";
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;

    fn new_draft() -> Self {
        Invoice {
            issued_on: Some(jiff::Zoned::now().date()),
            ..Default::default()
        }
    }

    fn derived_cell(&self, field: &str) -> Option<String> {
        (field == "total").then(|| format_money(self.total()))
    }
}

impl EntityView for Vehicle {
    const TITLE: &'static str = "Vehicles";
    const SINGULAR: &'static str = "vehicle";
    const COLUMNS: &'static [Column] = &[
        col("registration", "Registration"),
        col("make", "Make"),
        col("model", "Model"),
        col("vehicle_type", "Type"),
        col("year", "Year"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] =
        &["registration", "make", "model", "vehicle_type"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("registration", "Registration", FieldKind::Text),
        field("make", "Make", FieldKind::Text),
        field("model", "Model", FieldKind::Text),
        field(
            "vehicle_type",
            "Type",
            FieldKind::Reference(ReferenceTo::VehicleTypes),
        ),
        field("year", "Year", FieldKind::Integer),
    ];
    const DEFAULT_SORT: &'static str = "registration";
}

impl EntityView for Currency {
    const TITLE: &'static str = "Currencies";
    const SINGULAR: &'static str = "currency";
    const COLUMNS: &'static [Column] = &[
        col("code", "Code"),
        col("name", "Name"),
        col("symbol", "Symbol"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["code", "name"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("code", "Code", FieldKind::Text),
        field("name", "Name", FieldKind::Text),
        field("symbol", "Symbol", FieldKind::Text),
    ];
    const DEFAULT_SORT: &'static str = "code";
}

impl EntityView for Route {
    const TITLE: &'static str = "Routes";
    const SINGULAR: &'static str = "route";
    const COLUMNS: &'static [Column] = &[
        col("name", "Name"),
        col("zone_name", "Zone"),
        col("active", "Active"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "zone_name"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("zone_name", "Zone", FieldKind::Reference(ReferenceTo::Zones)),
        field("active", "Active", FieldKind::Bool),
    ];
    const DEFAULT_SORT: &'static str = "name";
}

impl EntityView for InspectionPointType {
    const TITLE: &'static str = "Inspection point types";
    const SINGULAR: &'static str = "inspection point type";
    const COLUMNS: &'static [Column] = &[
        col("name", "Name"),
        col("category_name", "Category"),
        col("active", "Active"),
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "category_name"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field(
            "category_name",
            "Category",
            FieldKind::Reference(ReferenceTo::InspectionPointCategories),
        ),
        field("active", "Active", FieldKind::Bool),
    ];
    const DEFAULT_SORT: &'static str = "name";
}

impl EntityView for ProposalTemplate {
    const TITLE: &'static str = "Proposal templates";
    const SINGULAR: &'static str = "proposal template";
    const COLUMNS: &'static [Column] =
        &[col("name", "Name"), col("subject", "Subject")];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "subject", "body"];
    const FORM_FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("subject", "Subject", FieldKind::Text),
        field("body", "Body", FieldKind::TextArea),
    ];
    const DEFAULT_SORT: &'static str = "name";
}
