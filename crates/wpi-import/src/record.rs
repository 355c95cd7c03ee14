use wpi_model::{ParsedRow, PlaceRecord};
use wpi_transform::{ENTRANCES_KEY, project_slots, slots_from_mapped};

use crate::fingerprint::row_fingerprint;

/// Project one parsed row into the record shape the store expects.
///
/// The logical entrance list is replaced by its numbered slot fields here,
/// at the write boundary; upstream stages only ever see the list.
#[must_use]
pub fn build_record(source_id: &str, row: &ParsedRow) -> PlaceRecord {
    let mut fields = row.mapped.clone();
    let slots = slots_from_mapped(&fields);
    if !slots.is_empty() {
        fields.remove(ENTRANCES_KEY);
        project_slots(&slots, &mut fields);
    }
    PlaceRecord {
        fingerprint: row_fingerprint(source_id, row.row_number()),
        fields,
    }
}
