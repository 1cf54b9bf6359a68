use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoices::MAX_UNIT_PRICE;
use crate::{FieldErrors, Record, RecordId, id_accessors};

/// A stocked product: baits, chemicals, traps, spare parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Quantity at or below which the item should be reordered.
    pub reorder_level: i64,
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// `None` when the product does not fit in a `Decimal`.
    pub fn stock_value(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity.max(0)))
    }
}

impl Record for InventoryItem {
    const COLLECTION_KEY: &'static str = "inventory";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("sku", &self.sku, "SKU");
        errors.require("name", &self.name, "Name");
        if self.quantity < 0 {
            errors.insert("quantity", "Quantity cannot be negative");
        }
        if self.unit_price < Decimal::ZERO {
            errors.insert("unit_price", "Unit price cannot be negative");
        } else if self.unit_price > MAX_UNIT_PRICE {
            errors.insert(
                "unit_price",
                format!("Unit price cannot be more than {MAX_UNIT_PRICE}"),
            );
        }
        if self.reorder_level < 0 {
            errors.insert("reorder_level", "Reorder level cannot be negative");
        }
        errors
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_reorder_and_value() {
        let item = InventoryItem {
            sku: "BAIT-01".into(),
            name: "Rodent bait".into(),
            quantity: 4,
            unit_price: dec!(12.50),
            reorder_level: 5,
            ..Default::default()
        };
        assert!(item.needs_reorder());
        assert_eq!(item.stock_value(), Some(dec!(50.00)));
        assert!(item.validate().is_empty());
    }

    #[test]
    fn test_negative_values_rejected() {
        let item = InventoryItem {
            quantity: -1,
            unit_price: dec!(-0.01),
            ..Default::default()
        };
        let errors = item.validate();
        for field in ["sku", "name", "quantity", "unit_price"] {
            assert!(errors.contains(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_stock_value_overflow() {
        let item = InventoryItem {
            quantity: i64::MAX,
            unit_price: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(item.stock_value(), None);
        assert!(item.validate().contains("unit_price"));
    }

    #[test]
    fn test_prices_are_stored_as_numbers() -> anyhow::Result<()> {
        let item = InventoryItem {
            unit_price: dec!(2.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&item)?;
        assert_eq!(json["unit_price"], serde_json::json!(2.5));

        let back: InventoryItem = serde_json::from_value(json)?;
        assert_eq!(back.unit_price, dec!(2.5));
        Ok(())
    }
}
