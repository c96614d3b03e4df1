//! Settings document handling for the Lemp box.
//!
//! The `Server.json` file captures all per-project customization of the
//! virtual environment. This crate owns its typed model, loading and
//! saving, the one-shot defaults resolution pass, and the project
//! initialization helpers used by `lemp make`.

pub mod defaults;
pub mod init;
pub mod settings;
pub mod slug;
pub mod template;

#[cfg(test)]
mod settings_tests;

pub use defaults::ResolvedSettings;
pub use settings::Settings;
