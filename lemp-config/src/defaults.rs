//! Default values and the one-shot defaults resolution pass.
//!
//! Defaults are applied eagerly, exactly once: every consumer of a
//! [`ResolvedSettings`] observes identical effective values, regardless
//! of the order in which fields are read.

use std::path::PathBuf;

use crate::settings::{
    BlackfireCredentials, EnvVariable, Folder, FolderOptions, PortMapping, Settings, Site,
    SiteParam,
};

pub const DEFAULT_NAME: &str = "starcorp-lemp";
pub const DEFAULT_BOX: &str = "starcorp/lemp";
pub const DEFAULT_BOX_VERSION: &str = ">= 0.0.2";
pub const DEFAULT_HOSTNAME: &str = "starcorp";
pub const DEFAULT_IP: &str = "192.168.10.20";
pub const DEFAULT_MEMORY: &str = "1024";
pub const DEFAULT_CPUS: &str = "1";
pub const DEFAULT_NAT_DNS_HOST_RESOLVER: &str = "on";
pub const DEFAULT_OS_TYPE: &str = "Ubuntu_64";
pub const DEFAULT_NETMASK: &str = "255.255.255.0";

/// In-band sentinel requesting an auto-assigned private network address.
pub const AUTONETWORK: &str = "autonetwork";

pub const DEFAULT_SITE_TYPE: &str = "basic";
pub const DEFAULT_SITE_PORT: &str = "80";
pub const DEFAULT_ANGULAR_PORT: &str = "4200";
pub const DEFAULT_SITE_SSL_PORT: &str = "443";
pub const DEFAULT_SITE_PHP: &str = "7.2";
pub const DEFAULT_SITE_INDEX: &str = "index";
pub const DEFAULT_SITE_STORE: &str = "mx";

/// PHP-FPM versions installed in the box; each gets its own pool config.
pub const PHP_FPM_VERSIONS: &[&str] = &["5.6", "7.0", "7.1", "7.2"];

pub const NFS_MOUNT_OPTIONS: &[&str] = &["actimeo=1", "nolock"];
pub const SMB_MOUNT_OPTIONS: &[&str] = &["vers=3.02", "mfsymlinks"];

/// Service ports forwarded to the host unless disabled or overridden:
/// (guest, host) pairs for nginx, nginx-ssl, mysql, ngrok, postgres,
/// mailhog and mongodb.
pub const DEFAULT_FORWARDED_PORTS: &[(u16, u16)] = &[
    (80, 8000),
    (443, 44300),
    (3306, 33060),
    (4040, 4040),
    (5432, 54320),
    (8025, 8025),
    (27017, 27017),
];

/// A settings document with every default applied.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub name: String,
    pub box_name: String,
    pub box_version: String,
    pub hostname: String,
    /// Still the raw string; [`AUTONETWORK`] is interpreted by the
    /// configurator, and the tunnel config step needs the value as-is.
    pub ip: String,
    pub memory: String,
    pub cpus: String,
    pub natdnshostresolver: String,
    pub gui: bool,
    pub default_ssh_port: Option<u16>,
    pub networks: Vec<ResolvedNetwork>,
    pub use_default_ports: bool,
    pub ports: Vec<PortMapping>,
    pub authorize: Option<Vec<PathBuf>>,
    pub keys: Option<Vec<PathBuf>>,
    pub tokens: Option<Vec<String>>,
    pub folders: Vec<ResolvedFolder>,
    pub sites: Vec<ResolvedSite>,
    pub variables: Vec<EnvVariable>,
    pub databases: Vec<String>,
    pub blackfire: Vec<BlackfireCredentials>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNetwork {
    pub r#type: String,
    pub ip: Option<String>,
    pub bridge: Option<String>,
    pub netmask: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFolder {
    pub map: PathBuf,
    pub to: String,
    pub r#type: Option<String>,
    /// Type-specific defaults, unless the document spells them out.
    pub mount_options: Vec<String>,
    pub options: FolderOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSite {
    pub map: String,
    pub to: Option<String>,
    pub r#type: String,
    pub port: String,
    pub ssl: String,
    pub php: String,
    pub params: Vec<SiteParam>,
    pub index: String,
    pub store: String,
}

fn resolve_folder(folder: &Folder) -> ResolvedFolder {
    let default_mount_options: &[&str] = match folder.r#type.as_deref() {
        Some("nfs") => NFS_MOUNT_OPTIONS,
        Some("smb") => SMB_MOUNT_OPTIONS,
        _ => &[],
    };
    let mount_options = folder.mount_options.clone().unwrap_or_else(|| {
        default_mount_options
            .iter()
            .map(|s| s.to_string())
            .collect()
    });

    ResolvedFolder {
        map: folder.map.clone(),
        to: folder.to.clone(),
        r#type: folder.r#type.clone(),
        mount_options,
        options: folder.options.clone().unwrap_or_default(),
    }
}

fn resolve_site(site: &Site) -> ResolvedSite {
    let r#type = site
        .r#type
        .clone()
        .unwrap_or_else(|| DEFAULT_SITE_TYPE.to_string());
    let default_port = if r#type == "angular" {
        DEFAULT_ANGULAR_PORT
    } else {
        DEFAULT_SITE_PORT
    };

    ResolvedSite {
        map: site.map.clone(),
        to: site.to.clone(),
        port: site.port.clone().unwrap_or_else(|| default_port.to_string()),
        ssl: site
            .ssl
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_SSL_PORT.to_string()),
        php: site
            .php
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_PHP.to_string()),
        params: site.params.clone(),
        index: site
            .index
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_INDEX.to_string()),
        store: site
            .store
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_STORE.to_string()),
        r#type,
    }
}

impl Settings {
    /// Apply every default in a single pass.
    pub fn resolved(&self) -> ResolvedSettings {
        ResolvedSettings {
            name: self.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string()),
            box_name: self
                .box_name
                .clone()
                .unwrap_or_else(|| DEFAULT_BOX.to_string()),
            box_version: self
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_BOX_VERSION.to_string()),
            hostname: self
                .hostname
                .clone()
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            ip: self.ip.clone().unwrap_or_else(|| DEFAULT_IP.to_string()),
            memory: self
                .memory
                .clone()
                .unwrap_or_else(|| DEFAULT_MEMORY.to_string()),
            cpus: self.cpus.clone().unwrap_or_else(|| DEFAULT_CPUS.to_string()),
            natdnshostresolver: self
                .natdnshostresolver
                .clone()
                .unwrap_or_else(|| DEFAULT_NAT_DNS_HOST_RESOLVER.to_string()),
            gui: self.gui.unwrap_or(false),
            default_ssh_port: self.default_ssh_port,
            networks: self
                .networks
                .iter()
                .map(|n| ResolvedNetwork {
                    r#type: n.r#type.clone(),
                    ip: n.ip.clone(),
                    bridge: n.bridge.clone(),
                    netmask: n
                        .netmask
                        .clone()
                        .unwrap_or_else(|| DEFAULT_NETMASK.to_string()),
                })
                .collect(),
            use_default_ports: self.default_ports.unwrap_or(true),
            ports: self.ports.clone(),
            authorize: self.authorize.clone(),
            keys: self.keys.clone(),
            tokens: self.tokens.clone(),
            folders: self.folders.iter().map(resolve_folder).collect(),
            sites: self.sites.iter().map(resolve_site).collect(),
            variables: self.variables.clone(),
            databases: self.databases.clone(),
            blackfire: self.blackfire.clone().unwrap_or_default(),
        }
    }
}
