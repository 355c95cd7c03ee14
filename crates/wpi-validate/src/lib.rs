//! Per-row structural validation.
//!
//! Takes the typed output of the transformer and decides whether a row may
//! be written: the name must be present and both coordinates must be finite
//! numbers inside the usual ranges. Pure and synchronous; knows nothing
//! about files, stores, or duplicates.

mod rules;

pub use rules::{LATITUDE_LIMIT, LONGITUDE_LIMIT, RowVerdict, validate_row};
