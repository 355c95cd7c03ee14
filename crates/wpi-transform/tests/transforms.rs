use std::collections::BTreeMap;

use wpi_model::{ColumnMapping, FieldCatalog, FieldType, FieldValue, PriceTier, RawRow};
use wpi_transform::{
    EntranceSlot, parse_entrances, project_slots, slots_from_mapped, transform, transform_row,
};

#[test]
fn array_splits_on_every_delimiter() {
    let value = transform("wifi, pool|showers;laundry", FieldType::Array);
    assert_eq!(
        value,
        Some(FieldValue::List(vec![
            "wifi".to_string(),
            "pool".to_string(),
            "showers".to_string(),
            "laundry".to_string(),
        ]))
    );
    assert_eq!(
        transform("", FieldType::Array),
        Some(FieldValue::List(Vec::new()))
    );
}

#[test]
fn price_never_fails() {
    assert_eq!(
        transform("premium", FieldType::Price),
        Some(FieldValue::Price(PriceTier::Mid))
    );
    assert_eq!(
        transform("", FieldType::Price),
        Some(FieldValue::Price(PriceTier::Mid))
    );
    assert_eq!(
        transform(" $$$ ", FieldType::Price),
        Some(FieldValue::Price(PriceTier::High))
    );
    assert_eq!(
        transform("1", FieldType::Price),
        Some(FieldValue::Price(PriceTier::Low))
    );
}

#[test]
fn boolean_words_are_case_insensitive() {
    assert_eq!(
        transform("Y", FieldType::Boolean),
        Some(FieldValue::Boolean(true))
    );
    assert_eq!(
        transform("No", FieldType::Boolean),
        Some(FieldValue::Boolean(false))
    );
    assert_eq!(transform("maybe", FieldType::Boolean), None);
    assert_eq!(transform("", FieldType::Boolean), None);
}

#[test]
fn number_parses_or_yields_null() {
    assert_eq!(
        transform(" 59.33 ", FieldType::Number),
        Some(FieldValue::Number(59.33))
    );
    assert_eq!(transform("north", FieldType::Number), None);
    assert_eq!(transform("", FieldType::Number), None);
}

#[test]
fn category_falls_back_to_other() {
    assert_eq!(
        transform("restaurant", FieldType::Category),
        Some(FieldValue::Text("Restaurant".to_string()))
    );
    assert_eq!(
        transform("dive bar", FieldType::Category),
        Some(FieldValue::Text("Other".to_string()))
    );
    assert_eq!(
        transform("", FieldType::Category),
        Some(FieldValue::Text("Other".to_string()))
    );
}

#[test]
fn text_trims_and_empties_to_null() {
    assert_eq!(
        transform("  Old Mill  ", FieldType::Text),
        Some(FieldValue::Text("Old Mill".to_string()))
    );
    assert_eq!(transform("   ", FieldType::Text), None);
}

fn raw_row(cells: &[(&str, &str)]) -> RawRow {
    RawRow {
        row_number: 2,
        cells: cells
            .iter()
            .map(|(column, value)| ((*column).to_string(), (*value).to_string()))
            .collect::<BTreeMap<String, String>>(),
    }
}

#[test]
fn transform_row_skips_null_results() {
    let catalog = FieldCatalog::standard();
    let mut mapping = ColumnMapping::new();
    mapping.set("name", Some("Name".to_string()));
    mapping.set("latitude", Some("Lat".to_string()));
    mapping.set("wheelchair_accessible", Some("Access".to_string()));

    let row = raw_row(&[("Name", " Harbor Cafe "), ("Lat", "oops"), ("Access", "yes")]);
    let transformed = transform_row(&catalog, &mapping, &row);
    assert!(transformed.errors.is_empty());
    assert_eq!(
        transformed.mapped.get("name"),
        Some(&FieldValue::Text("Harbor Cafe".to_string()))
    );
    assert!(!transformed.mapped.contains_key("latitude"));
    assert_eq!(
        transformed.mapped.get("wheelchair_accessible"),
        Some(&FieldValue::Boolean(true))
    );
}

#[test]
fn entrances_parse_names_and_coordinates() {
    let slots = parse_entrances("North Gate @ 59.332,18.064 | South Gate").expect("parse");
    assert_eq!(slots.len(), 2);
    assert_eq!(
        slots[0],
        EntranceSlot {
            name: "North Gate".to_string(),
            latitude: Some(59.332),
            longitude: Some(18.064),
        }
    );
    assert_eq!(slots[1].name, "South Gate");
    assert_eq!(slots[1].latitude, None);
}

#[test]
fn entrance_overflow_is_a_loud_error() {
    let message = parse_entrances("a|b|c|d|e|f").expect_err("six pieces");
    assert_eq!(message, "too many entrances: 6 (limit 5)");
    assert!(parse_entrances("a|b|c|d|e").is_ok());
}

#[test]
fn malformed_entrance_coordinates_fail_the_row() {
    let message = parse_entrances("Gate @ north,east").expect_err("bad latitude");
    assert!(message.contains("bad latitude"));
    let message = parse_entrances("Gate @ 59.3").expect_err("missing comma");
    assert!(message.contains("malformed coordinates"));
}

#[test]
fn entrances_survive_the_row_transform_and_project() {
    let catalog = FieldCatalog::standard();
    let mut mapping = ColumnMapping::new();
    mapping.set("entrances", Some("Gates".to_string()));

    let row = raw_row(&[("Gates", "North Gate @ 59.332,18.064; South Gate")]);
    let transformed = transform_row(&catalog, &mapping, &row);
    assert!(transformed.errors.is_empty());

    let slots = slots_from_mapped(&transformed.mapped);
    assert_eq!(slots.len(), 2);

    let mut fields = transformed.mapped.clone();
    project_slots(&slots, &mut fields);
    assert_eq!(
        fields.get("entrance_1_name"),
        Some(&FieldValue::Text("North Gate".to_string()))
    );
    assert_eq!(
        fields.get("entrance_1_latitude"),
        Some(&FieldValue::Number(59.332))
    );
    assert_eq!(
        fields.get("entrance_2_name"),
        Some(&FieldValue::Text("South Gate".to_string()))
    );
    assert!(!fields.contains_key("entrance_2_latitude"));
}

#[test]
fn entrance_overflow_lands_in_row_errors() {
    let catalog = FieldCatalog::standard();
    let mut mapping = ColumnMapping::new();
    mapping.set("entrances", Some("Gates".to_string()));

    let row = raw_row(&[("Gates", "a|b|c|d|e|f")]);
    let transformed = transform_row(&catalog, &mapping, &row);
    assert_eq!(transformed.errors.len(), 1);
    assert!(transformed.errors[0].contains("too many entrances"));
    assert!(!transformed.mapped.contains_key("entrances"));
}
