//! Import session orchestration: the wizard state machine plus duplicate
//! detection against the existing place snapshot.
//!
//! Everything below the session is deterministic and synchronous; the
//! session decides stage order, when the dedup snapshot is fetched, and
//! when rows are materialized.

pub mod dedup;
pub mod error;
pub mod session;

pub use dedup::{COORD_EPSILON_DEGREES, DuplicateDetector};
pub use error::{Result, SessionError};
pub use session::{ImportSession, Stage};
