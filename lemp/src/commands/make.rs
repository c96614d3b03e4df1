// Standard library imports
use std::env;
use std::path::Path;

// External crate imports
use anyhow::Result;
use tracing::debug;

use lemp_config::{slug::slug, template, Settings};
use lemp_core::file_system::{copy_if_missing, write_if_missing};
use lemp_core::lemp_println;

/// The environment-bootstrap boilerplate copied into the project root.
const VAGRANTFILE_TEMPLATE: &str = include_str!("../../resources/Vagrantfile");

const SETTINGS_FILENAME: &str = "Server.json";
const EXAMPLE_FILENAME: &str = "Server.json.example";

pub struct MakeOptions {
    pub name: Option<String>,
    pub hostname: Option<String>,
    pub ip: Option<String>,
    pub example: bool,
    pub json: bool,
}

/// Handles the `lemp make` command.
pub fn handle_make(options: MakeOptions) -> Result<()> {
    let base_path = env::current_dir()?;
    let project_name = base_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "lemp".to_string());
    let default_name = slug(&project_name);

    debug!(
        project = %project_name,
        json = options.json,
        example = options.example,
        "installing into project"
    );

    if write_if_missing(&base_path.join("Vagrantfile"), VAGRANTFILE_TEMPLATE)? {
        debug!("created Vagrantfile");
    }

    let settings_path = base_path.join(SETTINGS_FILENAME);
    let example_path = base_path.join(EXAMPLE_FILENAME);

    if !settings_path.exists() {
        create_settings_file(
            &base_path,
            &settings_path,
            &example_path,
            &options,
            &project_name,
            &default_name,
        )?;
    }

    if options.example {
        copy_if_missing(&settings_path, &example_path)?;
    }

    lemp_println!("Lemp Installed!");
    Ok(())
}

/// Seed the settings file, preferring an existing `.example` sibling
/// over the built-in template. Name and hostname overrides only apply
/// to the built-in template; the IP override always applies.
fn create_settings_file(
    base_path: &Path,
    settings_path: &Path,
    example_path: &Path,
    options: &MakeOptions,
    project_name: &str,
    default_name: &str,
) -> Result<()> {
    let from_example = example_path.exists();
    let mut settings = if from_example {
        Settings::from_file(example_path)?
    } else {
        template::default_settings()?
    };

    if !from_example {
        settings
            .update_name(Some(options.name.as_deref().unwrap_or(default_name)))
            .update_hostname(Some(options.hostname.as_deref().unwrap_or(default_name)));
    }

    settings
        .update_ip_address(options.ip.as_deref())
        .configure_sites(project_name, default_name)
        .configure_shared_folders(base_path, default_name)
        .save(settings_path)?;

    Ok(())
}
