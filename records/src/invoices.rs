use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FieldErrors, Record, RecordId, id_accessors};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Void,
}

/// Largest quantity accepted on one line.
pub const MAX_LINE_QUANTITY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Largest unit price accepted on one line.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

impl InvoiceStatus {
    pub const ALL: [&'static str; 4] = ["draft", "sent", "paid", "void"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLine {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl InvoiceLine {
    /// `None` when the product does not fit in a `Decimal`.
    pub fn amount(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }
}

/// Sum of the line amounts, `None` on overflow.
pub fn lines_total(lines: &[InvoiceLine]) -> Option<Decimal> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        total.checked_add(line.amount()?)
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub number: String,
    /// Denormalised customer name, not a reference to the customers
    /// collection.
    pub customer_name: String,
    pub issued_on: Option<Date>,
    pub due_on: Option<Date>,
    pub status: InvoiceStatus,
    pub lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub fn total(&self) -> Option<Decimal> {
        lines_total(&self.lines)
    }
}

impl Record for Invoice {
    const COLLECTION_KEY: &'static str = "invoices";

    id_accessors!();

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("number", &self.number, "Invoice number");
        errors.require("customer_name", &self.customer_name, "Customer");
        match (self.issued_on, self.due_on) {
            (None, _) => errors.insert("issued_on", "Issue date is required"),
            (Some(issued), Some(due)) if due < issued => errors.insert(
                "due_on",
                "Due date must be on or after the issue date",
            ),
            _ => {}
        }

        for (i, line) in self.lines.iter().enumerate() {
            errors.require(
                &format!("lines.{i}.description"),
                &line.description,
                "Description",
            );
            if line.quantity <= Decimal::ZERO {
                errors.insert(
                    format!("lines.{i}.quantity"),
                    "Quantity must be greater than 0",
                );
            } else if line.quantity > MAX_LINE_QUANTITY {
                errors.insert(
                    format!("lines.{i}.quantity"),
                    format!("Quantity cannot be more than {MAX_LINE_QUANTITY}"),
                );
            }
            if line.unit_price < Decimal::ZERO {
                errors.insert(
                    format!("lines.{i}.unit_price"),
                    "Unit price cannot be negative",
                );
            } else if line.unit_price > MAX_UNIT_PRICE {
                errors.insert(
                    format!("lines.{i}.unit_price"),
                    format!("Unit price cannot be more than {MAX_UNIT_PRICE}"),
                );
            }
        }
        errors
    }

    fn display_name(&self) -> String {
        format!("invoice {}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal::dec;

    fn invoice() -> Invoice {
        Invoice {
            number: "INV-1001".into(),
            customer_name: "Acme Storage".into(),
            issued_on: Some(date(2024, 3, 1)),
            due_on: Some(date(2024, 3, 31)),
            lines: vec![
                InvoiceLine {
                    description: "Quarterly rodent service".into(),
                    quantity: dec!(1),
                    unit_price: dec!(180.00),
                },
                InvoiceLine {
                    description: "Bait stations".into(),
                    quantity: dec!(4),
                    unit_price: dec!(12.50),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_total() {
        assert_eq!(invoice().total(), Some(dec!(230.00)));
        assert!(invoice().validate().is_empty());
    }

    #[test]
    fn test_due_date_before_issue_date() {
        let mut invoice = invoice();
        invoice.due_on = Some(date(2024, 2, 1));
        assert_eq!(
            invoice.validate().get("due_on"),
            Some("Due date must be on or after the issue date")
        );
    }

    #[test]
    fn test_line_errors_use_indexed_paths() {
        let mut invoice = invoice();
        invoice.issued_on = None;
        invoice.lines[1].description.clear();
        invoice.lines[1].quantity = dec!(0);
        let errors = invoice.validate();
        assert!(errors.contains("issued_on"));
        assert!(errors.contains("lines.1.description"));
        assert!(errors.contains("lines.1.quantity"));
        assert!(!errors.contains("lines.0.quantity"));
    }

    #[test]
    fn test_huge_lines_fail_validation_without_panicking() -> anyhow::Result<()> {
        let line: InvoiceLine = serde_json::from_value(serde_json::json!({
            "description": "Fumigation",
            "quantity": 1e15,
            "unit_price": 1e15,
        }))?;
        assert_eq!(line.amount(), None);

        let mut invoice = invoice();
        invoice.lines.push(line);
        assert_eq!(invoice.total(), None);

        let errors = invoice.validate();
        assert!(errors.contains("lines.2.quantity"));
        assert!(errors.contains("lines.2.unit_price"));
        Ok(())
    }

    #[test]
    fn test_dates_serialize_as_iso() -> anyhow::Result<()> {
        let json = serde_json::to_value(invoice())?;
        assert_eq!(json["issued_on"], "2024-03-01");
        assert_eq!(json["status"], "draft");
        Ok(())
    }
}
