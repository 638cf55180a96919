//! Configuration loader using figment for layered merging.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use super::WorkforceConfig;

/// Default configuration file, resolved against the working directory.
const CONFIG_FILE: &str = "workforce.toml";

/// Loads configuration from `./workforce.toml` with environment overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `./workforce.toml`, when present
/// 3. `WORKFORCE_*` environment variables
///
/// # Errors
///
/// Returns a [`figment::Error`] when a source fails to parse or extract.
pub fn load_config() -> Result<WorkforceConfig, Box<figment::Error>> {
    layered(Toml::file(CONFIG_FILE))
}

/// Loads configuration from a specific TOML file with environment overrides.
///
/// # Errors
///
/// Returns a [`figment::Error`] when a source fails to parse or extract.
pub fn load_config_from_path(path: &Path) -> Result<WorkforceConfig, Box<figment::Error>> {
    layered(Toml::file(path))
}

/// Loads configuration from TOML text only, without environment overrides.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the text fails to parse or extract.
pub fn load_config_from_str(toml_content: &str) -> Result<WorkforceConfig, Box<figment::Error>> {
    Figment::new()
        .merge(Serialized::defaults(WorkforceConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
        .map_err(Box::new)
}

fn layered(file: figment::providers::Data<Toml>) -> Result<WorkforceConfig, Box<figment::Error>> {
    Figment::new()
        .merge(Serialized::defaults(WorkforceConfig::default()))
        .merge(file)
        .merge(env_provider())
        .extract()
        .map_err(Box::new)
}

/// Maps `WORKFORCE_REASSIGNMENT_GUARD` to `reassignment.guard`.
fn env_provider() -> Env {
    Env::prefixed("WORKFORCE_")
        .map(|key| key.as_str().replacen("reassignment_", "reassignment.", 1).into())
}
