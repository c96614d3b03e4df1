//! Embedded default settings template.

use lemp_core::error::Result;

use crate::settings::Settings;

/// The built-in `Server.json` seed, used when the project has neither a
/// settings file nor an `.example` sibling.
pub const SETTINGS_TEMPLATE: &str = include_str!("../resources/Server.json");

/// Parse the embedded template into a settings document.
pub fn default_settings() -> Result<Settings> {
    Ok(serde_json::from_str(SETTINGS_TEMPLATE)?)
}
