use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Assignment of source columns to target fields, keyed by field key.
/// Unmapped fields have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    assignments: BTreeMap<String, String>,
}

impl ColumnMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column_for(&self, field_key: &str) -> Option<&str> {
        self.assignments.get(field_key).map(String::as_str)
    }

    /// Assigns or clears a field outright; the last call wins.
    pub fn set(&mut self, field_key: &str, column: Option<String>) {
        match column {
            Some(column) => {
                self.assignments.insert(field_key.to_string(), column);
            }
            None => {
                self.assignments.remove(field_key);
            }
        }
    }

    /// True when some field already claimed the column.
    #[must_use]
    pub fn uses_column(&self, column: &str) -> bool {
        self.assignments.values().any(|assigned| assigned == column)
    }

    pub fn assignments(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.assignments
            .iter()
            .map(|(key, column)| (key.as_str(), column.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
