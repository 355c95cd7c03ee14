//! Structural row checks.
//!
//! Every check runs; failures accumulate instead of short-circuiting so the
//! operator sees the whole picture for a row at once.

use wpi_model::{FieldValue, MappedData};

/// Inclusive latitude bound in degrees.
pub const LATITUDE_LIMIT: f64 = 90.0;
/// Inclusive longitude bound in degrees.
pub const LONGITUDE_LIMIT: f64 = 180.0;

/// Outcome of validating one mapped row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowVerdict {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl RowVerdict {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate one row of coerced values.
///
/// A key absent from `mapped` is a null: either the column was never mapped
/// or coercion produced nothing. Duplicate status is a separate concern and
/// never appears here.
#[must_use]
pub fn validate_row(mapped: &MappedData) -> RowVerdict {
    let mut errors = Vec::new();
    if let Some(issue) = name_issue(mapped) {
        errors.push(issue);
    }
    if let Some(issue) = coordinate_issue(mapped, "latitude", LATITUDE_LIMIT) {
        errors.push(issue);
    }
    if let Some(issue) = coordinate_issue(mapped, "longitude", LONGITUDE_LIMIT) {
        errors.push(issue);
    }
    RowVerdict::from_errors(errors)
}

fn name_issue(mapped: &MappedData) -> Option<String> {
    let present = mapped
        .get("name")
        .and_then(FieldValue::as_text)
        .is_some_and(|name| !name.trim().is_empty());
    if present {
        None
    } else {
        Some("name is required".to_string())
    }
}

fn coordinate_issue(mapped: &MappedData, key: &str, limit: f64) -> Option<String> {
    let Some(value) = mapped.get(key) else {
        return Some(format!("{key} is required"));
    };
    let Some(number) = value.as_number() else {
        return Some(format!("{key} must be a number"));
    };
    if !number.is_finite() {
        return Some(format!("{key} must be a finite number"));
    }
    if number < -limit || number > limit {
        return Some(format!("{key} must be between -{limit} and {limit}"));
    }
    None
}
