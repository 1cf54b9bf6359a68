//! Dot-path access into a record's serialised form.

use derive_more::Display;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// The scalar view of one field, as seen by search and sort.
///
/// Arrays and objects have no scalar view and read as `Missing`.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FieldValue {
    #[display("")]
    Missing,
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    Number(f64),
    #[display("{_0}")]
    Text(String),
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text that a search query is matched against. `None` never matches.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            other => Some(other.to_string()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::Missing => 3,
        }
    }

    /// Total order over values: `Bool < Number < Text < Missing`, numbers
    /// numerically, text byte-wise. Direction and the "missing last in
    /// both directions" rule are applied by the table.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Missing,
        }
    }
}

/// Serialise a record for field access. Records are plain structs, so this
/// only yields `Null` for types whose `Serialize` impl refuses.
pub fn to_document<R: Serialize>(record: &R) -> Value {
    serde_json::to_value(record).unwrap_or_default()
}

/// Follow a dot path (`"address.city"`, `"lines.0.amount"`) through a
/// document.
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(document, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            segment.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        _ => None,
    })
}

pub fn field_value(document: &Value, path: &str) -> FieldValue {
    lookup(document, path).map_or(FieldValue::Missing, FieldValue::from)
}

/// Replace the value at `path`. Intermediate segments must already exist;
/// the last segment may add a new key to an object.
///
/// Returns `false` if the path does not lead anywhere.
pub fn set_path(document: &mut Value, path: &str, new_value: Value) -> bool {
    let (parent_path, last) = match path.rsplit_once('.') {
        Some((parent, last)) => (Some(parent), last),
        None => (None, path),
    };
    let parent = match parent_path {
        Some(parent_path) => {
            let mut node = &mut *document;
            for segment in parent_path.split('.') {
                node = match node {
                    Value::Object(map) => match map.get_mut(segment) {
                        Some(child) => child,
                        None => return false,
                    },
                    Value::Array(items) => {
                        match segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                            Some(child) => child,
                            None => return false,
                        }
                    }
                    _ => return false,
                };
            }
            node
        }
        None => document,
    };

    match parent {
        Value::Object(map) => {
            map.insert(last.to_string(), new_value);
            true
        }
        Value::Array(items) => {
            match last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                Some(slot) => {
                    *slot = new_value;
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_paths() {
        let doc = json!({
            "name": "Ada",
            "age": 36,
            "active": true,
            "address": {"city": "London", "postal_code": null},
            "lines": [{"amount": 12.5}],
        });
        assert_eq!(field_value(&doc, "name"), FieldValue::Text("Ada".into()));
        assert_eq!(field_value(&doc, "age"), FieldValue::Number(36.0));
        assert_eq!(field_value(&doc, "active"), FieldValue::Bool(true));
        assert_eq!(
            field_value(&doc, "address.city"),
            FieldValue::Text("London".into())
        );
        assert_eq!(field_value(&doc, "lines.0.amount"), FieldValue::Number(12.5));
        assert!(field_value(&doc, "address.postal_code").is_missing());
        assert!(field_value(&doc, "address").is_missing());
        assert!(field_value(&doc, "nope.deeper").is_missing());
        assert!(field_value(&doc, "lines.x").is_missing());
    }

    #[test]
    fn test_search_text() {
        assert_eq!(FieldValue::Number(42.0).search_text().as_deref(), Some("42"));
        assert_eq!(FieldValue::Number(2.5).search_text().as_deref(), Some("2.5"));
        assert_eq!(FieldValue::Bool(false).search_text().as_deref(), Some("false"));
        assert_eq!(FieldValue::Missing.search_text(), None);
    }

    #[test]
    fn test_total_order() {
        let t = |s: &str| FieldValue::Text(s.into());
        assert_eq!(t("B").total_cmp(&t("a")), Ordering::Less);
        assert_eq!(
            FieldValue::Number(9.0).total_cmp(&FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(FieldValue::Bool(true).total_cmp(&t("a")), Ordering::Less);
        assert_eq!(FieldValue::Number(1.0).total_cmp(&t("0")), Ordering::Less);
        assert_eq!(FieldValue::Missing.total_cmp(&t("z")), Ordering::Greater);
    }

    #[test]
    fn test_set_path() {
        let mut doc = json!({"address": {"city": "Leeds"}, "lines": [{"qty": 1}]});
        assert!(set_path(&mut doc, "address.city", json!("York")));
        assert!(set_path(&mut doc, "lines.0.qty", json!(3)));
        assert!(set_path(&mut doc, "notes", json!("gate code 1234")));
        assert_eq!(doc["address"]["city"], "York");
        assert_eq!(doc["lines"][0]["qty"], 3);
        assert_eq!(doc["notes"], "gate code 1234");

        assert!(!set_path(&mut doc, "missing.city", json!("x")));
        assert!(!set_path(&mut doc, "lines.4.qty", json!(1)));
        assert!(!set_path(&mut doc, "notes.inner", json!(1)));
    }
}
