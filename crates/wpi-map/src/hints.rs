//! Advisory close-match hints for columns no alias matched.

use std::cmp::Ordering;

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

use wpi_model::{ColumnMapping, FieldCatalog};

use crate::mapper::normalize_name;

/// Minimum similarity for a hint to be worth showing.
const HINT_MIN_SIMILARITY: f64 = 0.84;

/// A ranked note that a leftover column resembles an unmapped field.
/// Hints are informational only; they never change the mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingHint {
    pub field_key: &'static str,
    pub column: String,
    pub similarity: f64,
}

/// Ranks unclaimed columns against the aliases of unmapped fields,
/// best matches first.
#[must_use]
pub fn close_matches(
    catalog: &FieldCatalog,
    mapping: &ColumnMapping,
    columns: &[String],
) -> Vec<MappingHint> {
    let mut hints = Vec::new();
    for field in catalog.fields() {
        if mapping.column_for(field.key).is_some() {
            continue;
        }
        for column in columns {
            if mapping.uses_column(column) {
                continue;
            }
            let normalized = normalize_name(column);
            if normalized.is_empty() {
                continue;
            }
            let best = field
                .aliases
                .iter()
                .map(|alias| jaro_similarity(normalize_name(alias).chars(), normalized.chars()))
                .fold(0.0_f64, f64::max);
            if best >= HINT_MIN_SIMILARITY {
                hints.push(MappingHint {
                    field_key: field.key,
                    column: column.clone(),
                    similarity: best,
                });
            }
        }
    }
    hints.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.field_key.cmp(b.field_key))
    });
    hints
}
