//! Library half of the import CLI: logging setup, the progress-reporting
//! store wrapper, and the wizard drive helpers shared by the subcommands.

pub mod logging;
pub mod progress;
pub mod wizard;
