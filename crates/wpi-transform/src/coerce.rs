//! Cell-level coercion rules, one per field type.

use wpi_model::{CATEGORIES, FieldType, FieldValue, OTHER_CATEGORY, PriceTier};

const TRUE_WORDS: &[&str] = &["true", "yes", "1", "y"];
const FALSE_WORDS: &[&str] = &["false", "no", "0", "n"];

/// Coerces one raw cell according to the target field type.
///
/// Empty input (after trimming) coerces to `None` for every type except
/// `array`, `category` and `price`, which have non-null fallbacks.
///
/// # Examples
///
/// ```
/// use wpi_model::{FieldType, FieldValue};
/// use wpi_transform::transform;
///
/// assert_eq!(
///     transform("wifi, pool|showers", FieldType::Array),
///     Some(FieldValue::List(vec![
///         "wifi".to_string(),
///         "pool".to_string(),
///         "showers".to_string(),
///     ]))
/// );
/// assert_eq!(transform("  ", FieldType::Text), None);
/// ```
#[must_use]
pub fn transform(raw: &str, field_type: FieldType) -> Option<FieldValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        && !matches!(
            field_type,
            FieldType::Array | FieldType::Category | FieldType::Price
        )
    {
        return None;
    }
    match field_type {
        FieldType::Text => Some(FieldValue::Text(trimmed.to_string())),
        FieldType::Number => trimmed.parse::<f64>().ok().map(FieldValue::Number),
        FieldType::Boolean => parse_boolean(trimmed).map(FieldValue::Boolean),
        FieldType::Array => Some(FieldValue::List(split_list(trimmed))),
        FieldType::Category => Some(FieldValue::Text(match_category(trimmed).to_string())),
        FieldType::Price => Some(FieldValue::Price(
            PriceTier::parse(trimmed).unwrap_or_default(),
        )),
    }
}

fn parse_boolean(trimmed: &str) -> Option<bool> {
    let lowered = trimmed.to_ascii_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Splits on comma, pipe or semicolon; pieces are trimmed and empties dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '|', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive exact match against the fixed category list, falling
/// back to the sentinel so category coercion never fails a row by itself.
fn match_category(raw: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|category| category.eq_ignore_ascii_case(raw))
        .copied()
        .unwrap_or(OTHER_CATEGORY)
}
