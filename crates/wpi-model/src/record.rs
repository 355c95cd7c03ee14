use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Snapshot entry fetched once per run for duplicate detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingPlace {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outgoing record handed to the place store, flattened onto target-schema
/// keys. Entrance sub-records occupy numbered slot keys such as
/// `entrance_1_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Advisory natural key derived from the upload. A store may use it to
    /// reject replays; the bundled stores do not.
    pub fingerprint: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl PlaceRecord {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(FieldValue::as_text)
    }

    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.fields.get("latitude").and_then(FieldValue::as_number)
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.fields.get("longitude").and_then(FieldValue::as_number)
    }
}
