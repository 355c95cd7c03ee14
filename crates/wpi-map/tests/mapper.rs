use proptest::prelude::*;

use wpi_map::{close_matches, normalize_name, suggest, unmapped_required, update};
use wpi_model::{ColumnMapping, FieldCatalog, FieldGroup, FieldType, TargetField};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn suggest_is_normalization_insensitive() {
    let catalog = FieldCatalog::standard();
    for spelling in ["place_name", "Place Name", "PLACE-NAME"] {
        let mapping = suggest(&catalog, &columns(&[spelling]));
        assert_eq!(mapping.column_for("name"), Some(spelling), "{spelling}");
    }
}

#[test]
fn suggest_assigns_each_column_once() {
    let catalog = FieldCatalog::standard();
    let mapping = suggest(&catalog, &columns(&["Title", "Venue", "lat", "lng"]));
    assert_eq!(mapping.column_for("name"), Some("Title"));
    assert_eq!(mapping.column_for("latitude"), Some("lat"));
    assert_eq!(mapping.column_for("longitude"), Some("lng"));
    assert!(!mapping.uses_column("Venue"));
}

static OVERLAPPING: &[TargetField] = &[
    TargetField {
        key: "primary",
        label: "Primary",
        group: FieldGroup::Basic,
        field_type: FieldType::Text,
        required: false,
        aliases: &["code"],
    },
    TargetField {
        key: "secondary",
        label: "Secondary",
        group: FieldGroup::Basic,
        field_type: FieldType::Text,
        required: false,
        aliases: &["code", "alt code"],
    },
];

#[test]
fn colliding_aliases_resolve_to_the_first_field() {
    let catalog = FieldCatalog::from_fields(OVERLAPPING);
    let mapping = suggest(&catalog, &columns(&["Code", "alt-code"]));
    assert_eq!(mapping.column_for("primary"), Some("Code"));
    assert_eq!(mapping.column_for("secondary"), Some("alt-code"));
}

#[test]
fn update_replaces_and_clears() {
    let catalog = FieldCatalog::standard();
    let mapping = ColumnMapping::new();
    let mapped = update(&catalog, &mapping, "name", Some("Place")).expect("set name");
    assert_eq!(mapped.column_for("name"), Some("Place"));
    let replaced = update(&catalog, &mapped, "name", Some("Venue")).expect("replace name");
    assert_eq!(replaced.column_for("name"), Some("Venue"));
    let cleared = update(&catalog, &replaced, "name", None).expect("clear name");
    assert_eq!(cleared.column_for("name"), None);
    assert!(update(&catalog, &mapping, "bogus", Some("X")).is_err());
}

#[test]
fn required_guard_reports_missing_fields() {
    let catalog = FieldCatalog::standard();
    let mapping = suggest(&catalog, &columns(&["name", "lat"]));
    let missing: Vec<&str> = unmapped_required(&catalog, &mapping)
        .iter()
        .map(|field| field.key)
        .collect();
    assert_eq!(missing, ["longitude"]);
}

#[test]
fn hints_rank_leftovers_without_touching_the_mapping() {
    let catalog = FieldCatalog::standard();
    let cols = columns(&["name", "lat", "Longitud"]);
    let mapping = suggest(&catalog, &cols);
    assert_eq!(mapping.column_for("longitude"), None);

    let hints = close_matches(&catalog, &mapping, &cols);
    assert!(
        hints
            .iter()
            .any(|hint| hint.field_key == "longitude" && hint.column == "Longitud")
    );
    assert_eq!(mapping, suggest(&catalog, &cols));
}

proptest! {
    #[test]
    fn update_is_idempotent(
        index in any::<prop::sample::Index>(),
        column in "[A-Za-z][A-Za-z0-9 _-]{0,14}",
    ) {
        let catalog = FieldCatalog::standard();
        let fields = catalog.fields();
        let field = fields[index.index(fields.len())];
        let once = update(&catalog, &ColumnMapping::new(), field.key, Some(&column))
            .expect("first update");
        let twice = update(&catalog, &once, field.key, Some(&column)).expect("second update");
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_ignores_case_and_separators(base in "[a-z]{1,8}", tail in "[a-z]{1,8}") {
        let spaced = format!("{base} {tail}");
        let snake = format!("{base}_{tail}");
        let kebab = format!("{base}-{tail}").to_uppercase();
        prop_assert_eq!(normalize_name(&spaced), normalize_name(&snake));
        prop_assert_eq!(normalize_name(&spaced), normalize_name(&kebab));
    }
}
