//! Mutable record standing in for the model instance under construction.
//!
//! Composed setters commit their final value here via [`Record::set_field`],
//! and a user-supplied setter receives the same record so it can write under
//! whatever field name it chooses.

use crate::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered store of committed field values for one model instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Record {
    values: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a value under a field name, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// Get a committed value by field name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Check if a field has been committed.
    pub fn contains_field(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of committed fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate committed fields in commit order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut record = Record::new();
        record.set_field("name", FieldValue::from("Alice"));

        assert_eq!(record.get("name"), Some(&FieldValue::from("Alice")));
        assert!(record.contains_field("name"));
        assert!(!record.contains_field("age"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut record = Record::new();
        record.set_field("name", FieldValue::from("Alice"));
        record.set_field("name", FieldValue::from("Bob"));

        assert_eq!(record.get("name"), Some(&FieldValue::from("Bob")));
        assert_eq!(record.len(), 1);
    }
}
