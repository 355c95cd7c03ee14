//! Name-plus-proximity duplicate detection.

use wpi_model::{ExistingPlace, FieldValue, MappedData, ParsedRow};

/// Coordinate delta below which two points count as the same spot, roughly
/// 100 m at mid-latitudes.
pub const COORD_EPSILON_DEGREES: f64 = 1e-3;

/// Flags rows that look like records the store already has.
///
/// Works against a snapshot fetched once per wizard run; candidates are
/// checked in snapshot order and the first hit wins. No tie-breaking, no
/// ranking.
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    existing: Vec<ExistingPlace>,
}

impl DuplicateDetector {
    #[must_use]
    pub fn new(existing: Vec<ExistingPlace>) -> Self {
        Self { existing }
    }

    #[must_use]
    pub fn snapshot_len(&self) -> usize {
        self.existing.len()
    }

    /// First existing record whose name matches case-insensitively and
    /// whose coordinate deltas are both strictly inside the epsilon.
    #[must_use]
    pub fn find_match(&self, name: &str, latitude: f64, longitude: f64) -> Option<&ExistingPlace> {
        let needle = name.trim().to_lowercase();
        self.existing.iter().find(|candidate| {
            candidate.name.trim().to_lowercase() == needle
                && (candidate.latitude - latitude).abs() < COORD_EPSILON_DEGREES
                && (candidate.longitude - longitude).abs() < COORD_EPSILON_DEGREES
        })
    }

    /// Annotate one row in place. Rows missing the name or either
    /// coordinate are left non-duplicate; the check is skipped, not failed.
    pub fn annotate(&self, row: &mut ParsedRow) {
        let Some(hit) = self.match_for(&row.mapped) else {
            return;
        };
        row.is_duplicate = true;
        row.duplicate_of = Some(hit.name.clone());
    }

    fn match_for(&self, mapped: &MappedData) -> Option<&ExistingPlace> {
        let name = mapped.get("name").and_then(FieldValue::as_text)?;
        let latitude = mapped.get("latitude").and_then(FieldValue::as_number)?;
        let longitude = mapped.get("longitude").and_then(FieldValue::as_number)?;
        self.find_match(name, latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing(id: &str, name: &str, latitude: f64, longitude: f64) -> ExistingPlace {
        ExistingPlace {
            id: id.to_string(),
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn nearby_same_name_matches() {
        let detector = DuplicateDetector::new(vec![existing("1", "Harbor Cafe", 59.332, 18.064)]);
        assert!(detector.find_match("harbor cafe", 59.3325, 18.0635).is_some());
    }

    #[test]
    fn distance_beyond_the_epsilon_does_not_match() {
        let detector = DuplicateDetector::new(vec![existing("1", "Harbor Cafe", 59.332, 18.064)]);
        assert!(detector.find_match("Harbor Cafe", 59.3335, 18.064).is_none());
        assert!(detector.find_match("Harbor Cafe", 59.332, 18.066).is_none());
    }

    #[test]
    fn name_mismatch_blocks_a_nearby_point() {
        let detector = DuplicateDetector::new(vec![existing("1", "Harbor Cafe", 59.332, 18.064)]);
        assert!(detector.find_match("Harbour Cafe", 59.332, 18.064).is_none());
    }

    #[test]
    fn first_snapshot_entry_wins() {
        let detector = DuplicateDetector::new(vec![
            existing("1", "Twin", 10.0, 20.0),
            existing("2", "Twin", 10.0001, 20.0001),
        ]);
        let hit = detector.find_match("twin", 10.0002, 20.0002);
        assert_eq!(hit.map(|place| place.id.as_str()), Some("1"));
    }

    #[test]
    fn rows_missing_fields_stay_non_duplicate() {
        let detector = DuplicateDetector::new(vec![existing("1", "Harbor Cafe", 59.332, 18.064)]);
        let mut row = ParsedRow::default();
        row.mapped.insert(
            "name".to_string(),
            FieldValue::Text("Harbor Cafe".to_string()),
        );
        detector.annotate(&mut row);
        assert!(!row.is_duplicate);
        assert_eq!(row.duplicate_of, None);
    }
}
