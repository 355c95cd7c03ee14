//! Row-level transformation across the mapped columns.

use wpi_model::{ColumnMapping, FieldCatalog, FieldValue, MappedData, RawRow};

use crate::coerce::transform;
use crate::entrance::{ENTRANCES_KEY, parse_entrances};

/// Coerced values for one row plus any structural errors raised while
/// parsing entrance slots. Plain coercion never errors; it produces null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformedRow {
    pub mapped: MappedData,
    pub errors: Vec<String>,
}

/// Coerces every mapped cell of one raw row. Fields whose coercion yields
/// null stay absent from the result.
///
/// The entrances field bypasses the generic array rule: its pieces split on
/// `|` and `;` only, because coordinates inside a piece contain commas. The
/// parsed slots are stored back as canonical piece strings.
#[must_use]
pub fn transform_row(
    catalog: &FieldCatalog,
    mapping: &ColumnMapping,
    row: &RawRow,
) -> TransformedRow {
    let mut result = TransformedRow::default();
    for field in catalog.fields() {
        let Some(column) = mapping.column_for(field.key) else {
            continue;
        };
        let Some(raw) = row.cell(column) else {
            continue;
        };
        if field.key == ENTRANCES_KEY {
            match parse_entrances(raw) {
                Ok(slots) if slots.is_empty() => {}
                Ok(slots) => {
                    let pieces = slots.iter().map(ToString::to_string).collect();
                    result
                        .mapped
                        .insert(field.key.to_string(), FieldValue::List(pieces));
                }
                Err(message) => result.errors.push(message),
            }
            continue;
        }
        if let Some(value) = transform(raw, field.field_type) {
            result.mapped.insert(field.key.to_string(), value);
        }
    }
    result
}
