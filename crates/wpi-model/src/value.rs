use serde::{Deserialize, Serialize};
use std::fmt;

/// Price tier of a place, displayed as dollar signs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Low,
    #[default]
    #[serde(rename = "$$")]
    Mid,
    #[serde(rename = "$$$")]
    High,
}

impl PriceTier {
    /// Strict parse of the recognized spellings. The fallback for anything
    /// else belongs to the transformer, not here.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" | "$" => Some(PriceTier::Low),
            "2" | "$$" => Some(PriceTier::Mid),
            "3" | "$$$" => Some(PriceTier::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Low => "$",
            PriceTier::Mid => "$$",
            PriceTier::High => "$$$",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A coerced cell value. A key absent from the mapped data is the null
/// produced by coercion; a present value is always well-typed.
///
/// Variant order matters: untagged deserialization tries `Price` before
/// `Text` so dollar-sign strings keep their tier type on round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Boolean(bool),
    List(Vec<String>),
    Price(PriceTier),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Price(tier) => write!(f, "{tier}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}
