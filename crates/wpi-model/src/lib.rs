pub mod catalog;
pub mod error;
pub mod mapping;
pub mod record;
pub mod results;
pub mod row;
pub mod value;

pub use catalog::{CATEGORIES, FieldCatalog, FieldGroup, FieldType, OTHER_CATEGORY, TargetField};
pub use error::{ModelError, Result};
pub use mapping::ColumnMapping;
pub use record::{ExistingPlace, PlaceRecord};
pub use results::ImportResults;
pub use row::{FileTable, MappedData, ParsedRow, RawRow};
pub use value::{FieldValue, PriceTier};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn catalog_keys_are_unique() {
        let catalog = FieldCatalog::standard();
        let keys: Vec<&str> = catalog.fields().iter().map(|f| f.key).collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
        assert_eq!(keys.first(), Some(&"name"));
    }

    #[test]
    fn required_fields_are_name_and_coordinates() {
        let catalog = FieldCatalog::standard();
        let required: Vec<&str> = catalog.required_fields().map(|f| f.key).collect();
        assert_eq!(required, ["name", "latitude", "longitude"]);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let catalog = FieldCatalog::standard();
        assert!(catalog.require("name").is_ok());
        assert!(matches!(
            catalog.require("nope"),
            Err(ModelError::UnknownField(_))
        ));
    }

    #[test]
    fn category_list_ends_with_the_fallback() {
        assert_eq!(CATEGORIES.last(), Some(&OTHER_CATEGORY));
    }

    #[test]
    fn price_tier_parses_symbols_and_numerals() {
        assert_eq!(PriceTier::parse("$$$"), Some(PriceTier::High));
        assert_eq!(PriceTier::parse(" 2 "), Some(PriceTier::Mid));
        assert_eq!(PriceTier::parse("premium"), None);
        assert_eq!(PriceTier::default().as_str(), "$$");
    }

    #[test]
    fn mapping_set_clears_on_none() {
        let mut mapping = ColumnMapping::new();
        mapping.set("name", Some("Place".to_string()));
        assert_eq!(mapping.column_for("name"), Some("Place"));
        assert!(mapping.uses_column("Place"));
        mapping.set("name", None);
        assert_eq!(mapping.column_for("name"), None);
        assert!(mapping.is_empty());
    }

    #[test]
    fn place_record_round_trips_through_json() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), FieldValue::Text("Harbor Cafe".into()));
        fields.insert("latitude".to_string(), FieldValue::Number(59.33));
        fields.insert(
            "price_level".to_string(),
            FieldValue::Price(PriceTier::Low),
        );
        let record = PlaceRecord {
            fingerprint: "ab12".to_string(),
            fields,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: PlaceRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.name(), Some("Harbor Cafe"));
        assert_eq!(round.latitude(), Some(59.33));
        assert_eq!(
            round.fields.get("price_level"),
            Some(&FieldValue::Price(PriceTier::Low))
        );
    }

    #[test]
    fn pushing_an_error_invalidates_the_row() {
        let mut row = ParsedRow {
            is_valid: true,
            ..ParsedRow::default()
        };
        row.push_error("batch write failed: timeout");
        assert!(!row.is_valid);
        assert_eq!(row.errors.len(), 1);
    }
}
