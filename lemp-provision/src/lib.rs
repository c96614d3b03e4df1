//! Environment configuration for the Lemp box.
//!
//! Translates a defaults-resolved settings document into the ordered
//! directive sequence a Vagrant environment is built from. Directives
//! are descriptions only; nothing here touches the virtual machine.

pub mod configurator;
pub mod directive;
pub mod vagrant;


pub use configurator::configure;
pub use vagrant::VagrantConfig;
