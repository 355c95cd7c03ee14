//! Column mapping for the place importer: alias-based auto-suggestion,
//! operator overrides, advisory close-match hints and saved presets.

pub mod error;
pub mod hints;
pub mod mapper;
pub mod presets;

pub use error::{PresetError, Result};
pub use hints::{MappingHint, close_matches};
pub use mapper::{normalize_name, suggest, unmapped_required, update};
pub use presets::{MappingPreset, PresetStore};
