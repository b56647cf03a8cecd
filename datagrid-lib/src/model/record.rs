//! Dynamic grid record

use chrono::DateTime;
use chrono::Utc;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// One data item bound to the grid.
///
/// Records hold field values as an insertion-ordered map, so the order in
/// which fields are set (or appear in a decoded JSON object) is the order
/// the grid enumerates them when auto-generating columns. Typed getters
/// provide convenient access from search predicates and custom comparators.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Record;
///
/// let record = Record::new()
///     .set("company", "Contoso")
///     .set("employees", 250i64);
///
/// assert_eq!(record.get_str("company"), Some("Contoso"));
/// assert_eq!(record.get_i64("employees"), Some(250));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, builder style.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value in place.
    ///
    /// A new field goes to the end of the enumeration order; overwriting an
    /// existing field keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    /// String field value, `None` when missing or a different type.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer field value, `None` when missing or a different type.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        match self.get(field) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Float field value, `None` when missing or a different type.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        match self.get(field) {
            Some(Value::Float(n)) => Some(*n),
            Some(Value::Int(n)) => Some(*n as f64),
            _ => None,
        }
    }

    /// Boolean field value, `None` when missing or a different type.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.get(field) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Datetime field value, `None` when missing or a different type.
    pub fn get_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.get(field) {
            Some(Value::DateTime(dt)) => Some(*dt),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_keep_insertion_order() {
        let record = Record::new()
            .set("id", 1i64)
            .set("company", "Acme")
            .set("phone", "555-0100")
            .set("state", "OR");

        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, ["id", "company", "phone", "state"]);
    }

    #[test]
    fn test_json_object_keeps_key_order() {
        let record: Record =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_typed_getters() {
        let record = Record::new()
            .set("name", "Acme")
            .set("count", 3i64)
            .set("active", true);

        assert_eq!(record.get_str("name"), Some("Acme"));
        assert_eq!(record.get_i64("count"), Some(3));
        assert_eq!(record.get_bool("active"), Some(true));
        assert_eq!(record.get_str("count"), None);
        assert_eq!(record.get_str("missing"), None);
    }
}
