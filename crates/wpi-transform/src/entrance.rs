//! Entrance slot parsing and projection.
//!
//! A place row may describe up to five named sub-locations. The source cell
//! holds pieces separated by `|` or `;`, each `NAME` or `NAME @ LAT,LON`.
//! The target schema models the slots as fixed numbered field groups, so
//! projection turns one logical row into `entrance_1_*` through
//! `entrance_5_*` fields.

use std::fmt;

use wpi_model::{FieldValue, MappedData};

/// Bounded arity of the entrance slot group in the target schema.
pub const MAX_ENTRANCES: usize = 5;

/// Catalog key of the entrances field.
pub const ENTRANCES_KEY: &str = "entrances";

/// One parsed sub-location.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceSlot {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl fmt::Display for EntranceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => write!(f, "{} @ {lat},{lon}", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

/// Parses the entrances cell into at most [`MAX_ENTRANCES`] slots.
///
/// Overflow is a loud per-row error, never a silent truncation, and a piece
/// with malformed coordinates likewise fails the row. The `Err` variant is
/// the user-facing message destined for the row's error list.
pub fn parse_entrances(raw: &str) -> Result<Vec<EntranceSlot>, String> {
    let pieces: Vec<&str> = raw
        .split(['|', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();
    if pieces.len() > MAX_ENTRANCES {
        return Err(format!(
            "too many entrances: {} (limit {MAX_ENTRANCES})",
            pieces.len()
        ));
    }
    pieces.iter().map(|piece| parse_slot(piece)).collect()
}

fn parse_slot(piece: &str) -> Result<EntranceSlot, String> {
    let Some((name, coords)) = piece.split_once('@') else {
        return Ok(EntranceSlot {
            name: piece.trim().to_string(),
            latitude: None,
            longitude: None,
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("entrance missing a name: \"{piece}\""));
    }
    let Some((lat, lon)) = coords.split_once(',') else {
        return Err(format!(
            "entrance \"{name}\" has malformed coordinates: \"{}\"",
            coords.trim()
        ));
    };
    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("entrance \"{name}\" has a bad latitude: \"{}\"", lat.trim()))?;
    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("entrance \"{name}\" has a bad longitude: \"{}\"", lon.trim()))?;
    Ok(EntranceSlot {
        name: name.to_string(),
        latitude: Some(latitude),
        longitude: Some(longitude),
    })
}

/// Recovers slots from the canonical piece list the row transform stored.
#[must_use]
pub fn slots_from_mapped(mapped: &MappedData) -> Vec<EntranceSlot> {
    let Some(FieldValue::List(pieces)) = mapped.get(ENTRANCES_KEY) else {
        return Vec::new();
    };
    pieces
        .iter()
        .filter_map(|piece| parse_slot(piece).ok())
        .collect()
}

/// Projects slots onto the numbered record fields of the target schema.
pub fn project_slots(slots: &[EntranceSlot], fields: &mut MappedData) {
    for (index, slot) in slots.iter().take(MAX_ENTRANCES).enumerate() {
        let n = index + 1;
        fields.insert(
            format!("entrance_{n}_name"),
            FieldValue::Text(slot.name.clone()),
        );
        if let Some(latitude) = slot.latitude {
            fields.insert(
                format!("entrance_{n}_latitude"),
                FieldValue::Number(latitude),
            );
        }
        if let Some(longitude) = slot.longitude {
            fields.insert(
                format!("entrance_{n}_longitude"),
                FieldValue::Number(longitude),
            );
        }
    }
}
