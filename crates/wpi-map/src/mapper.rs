//! Alias-based column auto-mapping against the field catalog.

use wpi_model::{ColumnMapping, FieldCatalog, ModelError, TargetField};

/// Normalizes a header or alias for comparison: lowercased, with spaces,
/// underscores, hyphens and dots removed.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '_' | '-' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Proposes a mapping from source columns to target fields.
///
/// Fields are visited in catalog order; each takes the first column whose
/// normalized name equals one of its normalized aliases. A column claimed
/// by an earlier field is never reassigned.
#[must_use]
pub fn suggest(catalog: &FieldCatalog, columns: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for field in catalog.fields() {
        if let Some(column) = match_column(field, columns, &mapping) {
            mapping.set(field.key, Some(column));
        }
    }
    mapping
}

fn match_column(
    field: &TargetField,
    columns: &[String],
    taken: &ColumnMapping,
) -> Option<String> {
    for column in columns {
        if taken.uses_column(column) {
            continue;
        }
        let normalized = normalize_name(column);
        if normalized.is_empty() {
            continue;
        }
        if field
            .aliases
            .iter()
            .any(|alias| normalize_name(alias) == normalized)
        {
            return Some(column.clone());
        }
    }
    None
}

/// Applies an operator override. Setting a field replaces any prior value
/// outright and `None` clears it; unknown field keys are rejected.
pub fn update(
    catalog: &FieldCatalog,
    mapping: &ColumnMapping,
    field_key: &str,
    column: Option<&str>,
) -> Result<ColumnMapping, ModelError> {
    catalog.require(field_key)?;
    let mut next = mapping.clone();
    next.set(field_key, column.map(str::to_string));
    Ok(next)
}

/// Required fields still missing a column. The wizard may not advance past
/// the mapping stage until this is empty.
#[must_use]
pub fn unmapped_required(
    catalog: &FieldCatalog,
    mapping: &ColumnMapping,
) -> Vec<&'static TargetField> {
    catalog
        .required_fields()
        .filter(|field| mapping.column_for(field.key).is_none())
        .collect()
}
