use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Value semantics of a target field. The transformer owns the per-type
/// coercion rules; validation only sees the coerced result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Trimmed free text; empty input coerces to null.
    Text,
    /// Finite floating point; unparseable input coerces to null.
    Number,
    /// true/yes/1/y and false/no/0/n, case-insensitive.
    Boolean,
    /// Delimited list split on comma, pipe or semicolon.
    Array,
    /// One of the fixed category names, with "Other" as the fallback.
    Category,
    /// $ / $$ / $$$ or the numeric tiers 1-3, defaulting to $$.
    Price,
}

/// Display grouping for the mapping and preview screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Basic,
    Location,
    Contact,
    External,
    Entrance,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 5] = [
        FieldGroup::Basic,
        FieldGroup::Location,
        FieldGroup::Contact,
        FieldGroup::External,
        FieldGroup::Entrance,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldGroup::Basic => "Basic",
            FieldGroup::Location => "Location",
            FieldGroup::Contact => "Contact",
            FieldGroup::External => "External",
            FieldGroup::Entrance => "Entrance",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the fixed target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetField {
    pub key: &'static str,
    pub label: &'static str,
    pub group: FieldGroup,
    pub field_type: FieldType,
    pub required: bool,
    /// Recognized source-column spellings, matched punctuation-insensitively.
    pub aliases: &'static [&'static str],
}

const fn field(
    key: &'static str,
    label: &'static str,
    group: FieldGroup,
    field_type: FieldType,
    required: bool,
    aliases: &'static [&'static str],
) -> TargetField {
    TargetField {
        key,
        label,
        group,
        field_type,
        required,
        aliases,
    }
}

/// The import schema in display order. Order matters: auto-mapping resolves
/// column collisions in favor of the first field in this list.
const STANDARD_FIELDS: &[TargetField] = &[
    field(
        "name",
        "Name",
        FieldGroup::Basic,
        FieldType::Text,
        true,
        &["name", "place name", "title", "venue", "location name"],
    ),
    field(
        "category",
        "Category",
        FieldGroup::Basic,
        FieldType::Category,
        false,
        &["category", "type", "place type", "kind"],
    ),
    field(
        "description",
        "Description",
        FieldGroup::Basic,
        FieldType::Text,
        false,
        &["description", "about", "summary", "notes"],
    ),
    field(
        "amenities",
        "Amenities",
        FieldGroup::Basic,
        FieldType::Array,
        false,
        &["amenities", "features", "facilities", "tags"],
    ),
    field(
        "price_level",
        "Price level",
        FieldGroup::Basic,
        FieldType::Price,
        false,
        &["price level", "price", "price tier", "cost"],
    ),
    field(
        "wheelchair_accessible",
        "Wheelchair accessible",
        FieldGroup::Basic,
        FieldType::Boolean,
        false,
        &["wheelchair accessible", "accessible", "ada", "wheelchair"],
    ),
    field(
        "latitude",
        "Latitude",
        FieldGroup::Location,
        FieldType::Number,
        true,
        &["latitude", "lat", "y coord"],
    ),
    field(
        "longitude",
        "Longitude",
        FieldGroup::Location,
        FieldType::Number,
        true,
        &["longitude", "lon", "lng", "long", "x coord"],
    ),
    field(
        "address",
        "Address",
        FieldGroup::Location,
        FieldType::Text,
        false,
        &["address", "street address", "street"],
    ),
    field(
        "city",
        "City",
        FieldGroup::Location,
        FieldType::Text,
        false,
        &["city", "town", "locality"],
    ),
    field(
        "country",
        "Country",
        FieldGroup::Location,
        FieldType::Text,
        false,
        &["country", "country code", "nation"],
    ),
    field(
        "phone",
        "Phone",
        FieldGroup::Contact,
        FieldType::Text,
        false,
        &["phone", "phone number", "telephone", "tel"],
    ),
    field(
        "email",
        "Email",
        FieldGroup::Contact,
        FieldType::Text,
        false,
        &["email", "e mail", "email address"],
    ),
    field(
        "website",
        "Website",
        FieldGroup::Contact,
        FieldType::Text,
        false,
        &["website", "url", "web", "homepage"],
    ),
    field(
        "external_id",
        "External ID",
        FieldGroup::External,
        FieldType::Text,
        false,
        &["external id", "source id", "ref", "reference id"],
    ),
    field(
        "source_url",
        "Source URL",
        FieldGroup::External,
        FieldType::Text,
        false,
        &["source url", "listing url", "origin url"],
    ),
    field(
        "entrances",
        "Entrances",
        FieldGroup::Entrance,
        FieldType::Array,
        false,
        &["entrances", "entrance list", "access points"],
    ),
];

/// Fallback category for unrecognized input.
pub const OTHER_CATEGORY: &str = "Other";

/// Fixed category names. Matching is case-insensitive and exact; anything
/// else lands on [`OTHER_CATEGORY`].
pub const CATEGORIES: &[&str] = &[
    "Restaurant",
    "Cafe",
    "Bar",
    "Park",
    "Museum",
    "Hotel",
    "Shop",
    "Beach",
    "Viewpoint",
    "Campground",
    OTHER_CATEGORY,
];

/// The fixed, ordered registry of target fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldCatalog {
    fields: &'static [TargetField],
}

impl FieldCatalog {
    #[must_use]
    pub const fn standard() -> Self {
        FieldCatalog {
            fields: STANDARD_FIELDS,
        }
    }

    /// Registry over a caller-supplied field list.
    #[must_use]
    pub const fn from_fields(fields: &'static [TargetField]) -> Self {
        FieldCatalog { fields }
    }

    #[must_use]
    pub fn fields(&self) -> &'static [TargetField] {
        self.fields
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static TargetField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn require(&self, key: &str) -> Result<&'static TargetField> {
        self.field(key)
            .ok_or_else(|| ModelError::UnknownField(key.to_string()))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static TargetField> + '_ {
        self.fields.iter().filter(|f| f.required)
    }

    #[must_use]
    pub fn group_fields(&self, group: FieldGroup) -> Vec<&'static TargetField> {
        self.fields.iter().filter(|f| f.group == group).collect()
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
