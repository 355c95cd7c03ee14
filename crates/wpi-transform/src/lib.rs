//! Value coercion for the place importer: per-type cell rules, row-level
//! transformation and entrance slot handling.

pub mod coerce;
pub mod entrance;
pub mod row;

pub use coerce::transform;
pub use entrance::{
    ENTRANCES_KEY, EntranceSlot, MAX_ENTRANCES, parse_entrances, project_slots, slots_from_mapped,
};
pub use row::{TransformedRow, transform_row};
