//! Project initialization: the mutations `lemp make` applies to a
//! freshly seeded settings document.

use std::path::Path;

use crate::settings::{Folder, Settings, Site};

/// In-box path the default site serves from.
pub const DEFAULT_SITE_TO: &str = "/home/vagrant/code/public";

/// In-box mount point for the project's shared folder.
pub const DEFAULT_FOLDER_TO: &str = "/home/vagrant/code";

/// Hostname suffix for the default site entry.
pub const SITE_DOMAIN_SUFFIX: &str = ".test";

impl Settings {
    /// Set the machine name, unless the override is empty.
    pub fn update_name(&mut self, name: Option<&str>) -> &mut Self {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = Some(name.to_string());
        }
        self
    }

    /// Set the hostname, unless the override is empty.
    pub fn update_hostname(&mut self, hostname: Option<&str>) -> &mut Self {
        if let Some(hostname) = hostname.filter(|h| !h.is_empty()) {
            self.hostname = Some(hostname.to_string());
        }
        self
    }

    /// Set the IP address, unless the override is empty.
    pub fn update_ip_address(&mut self, ip: Option<&str>) -> &mut Self {
        if let Some(ip) = ip.filter(|i| !i.is_empty()) {
            self.ip = Some(ip.to_string());
        }
        self
    }

    /// Append the default site entry for the project.
    pub fn configure_sites(&mut self, _project_name: &str, project_slug: &str) -> &mut Self {
        self.sites.push(Site {
            map: format!("{}{}", project_slug, SITE_DOMAIN_SUFFIX),
            to: Some(DEFAULT_SITE_TO.to_string()),
            r#type: None,
            port: None,
            ssl: None,
            php: None,
            params: Vec::new(),
            index: None,
            store: None,
        });
        self
    }

    /// Append the default shared-folder entry mapping the project
    /// directory into the box.
    pub fn configure_shared_folders(&mut self, base_path: &Path, _project_slug: &str) -> &mut Self {
        self.folders.push(Folder {
            map: base_path.to_path_buf(),
            to: DEFAULT_FOLDER_TO.to_string(),
            r#type: None,
            options: None,
            mount_options: None,
        });
        self
    }
}
