//! Configuration for the workforce task tracker.
//!
//! Settings are layered with figment: compiled defaults, then an optional
//! TOML file, then `WORKFORCE_`-prefixed environment variables.

mod loader;
mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ReassignmentConfig, StaffSeed, WorkforceConfig};
