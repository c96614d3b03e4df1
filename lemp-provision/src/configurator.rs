//! Builds the directive sequence for a Lemp box environment.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use lemp_config::defaults::{
    ResolvedSettings, AUTONETWORK, DEFAULT_FORWARDED_PORTS, DEFAULT_OS_TYPE, PHP_FPM_VERSIONS,
};
use lemp_config::settings::{Protocol, SiteParam};
use lemp_core::error::{LempError, Result};

use crate::directive::{PrivateNetwork, Provisioner, ProviderCustomization};
use crate::vagrant::VagrantConfig;

const AUTHORIZED_KEYS_CMD: &str = "echo $1 | grep -xq \"$1\" /home/vagrant/.ssh/authorized_keys || echo \"\n$1\" | tee -a /home/vagrant/.ssh/authorized_keys";
const PRIVATE_KEY_CMD: &str =
    "echo \"$1\" > /home/vagrant/.ssh/$2 && chmod 600 /home/vagrant/.ssh/$2";
const COMPOSER_TOKEN_CMD: &str = "composer config --global --auth gitlab-token.gitlab.com $1";
const FOLDER_WARNING_CMD: &str =
    ">&2 echo \"Unable to mount one of your folders. Please check your folders in Server.json\"";
const PROFILE_EXPORT_CMD: &str =
    "echo \"\n# Set Lemp Environment Variable\nexport $1=$2\" >> /home/vagrant/.profile";

/// Translate a resolved settings document into directives recorded on
/// `config`.
///
/// Directives are only descriptions; a missing credential path aborts
/// the build before any provisioning step has been recorded, so there
/// is nothing to roll back.
pub fn configure(settings: &ResolvedSettings, config: &mut VagrantConfig) -> Result<()> {
    // Machine identity
    config.forward_agent();
    config.define(&settings.name);
    config.set_box(&settings.box_name, &settings.box_version);
    config.hostname(&settings.hostname);

    configure_networks(settings, config);
    configure_provider(settings, config);
    configure_ports(settings, config);
    configure_credentials(settings, config)?;

    config.provision(Provisioner::script("update.sh"));

    configure_sites(settings, config);
    configure_folders(settings, config);
    configure_variables(settings, config);
    configure_databases(settings, config);
    configure_blackfire(settings, config);

    // Tunnel configuration keyed by the assigned IP, last.
    config.provision(
        Provisioner::script("create-ngrok.sh")
            .args([settings.ip.clone()])
            .unprivileged(),
    );

    Ok(())
}

fn configure_networks(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    if settings.ip == AUTONETWORK {
        config.private_network(PrivateNetwork::Auto);
    } else {
        config.private_network(PrivateNetwork::Static {
            ip: settings.ip.clone(),
        });
    }

    for network in &settings.networks {
        config.network(
            &network.r#type,
            network.ip.as_deref(),
            network.bridge.as_deref(),
            &network.netmask,
        );
    }
}

fn configure_provider(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    config.customize(ProviderCustomization::Name(settings.name.clone()));
    config.customize(ProviderCustomization::Memory(settings.memory.clone()));
    config.customize(ProviderCustomization::Cpus(settings.cpus.clone()));
    config.customize(ProviderCustomization::NatDnsProxy { on: true });
    config.customize(ProviderCustomization::NatDnsHostResolver(
        settings.natdnshostresolver.clone(),
    ));
    config.customize(ProviderCustomization::OsType(DEFAULT_OS_TYPE.to_string()));
    if settings.gui {
        config.customize(ProviderCustomization::Gui);
    }

    if let Some(host) = settings.default_ssh_port {
        config.forwarded_port(22, host, Protocol::Tcp, false, Some("ssh"));
    }
}

fn configure_ports(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    if settings.use_default_ports {
        for &(guest, host) in DEFAULT_FORWARDED_PORTS {
            let overridden = settings.ports.iter().any(|mapping| mapping.guest == guest);
            if !overridden {
                config.forwarded_port(guest, host, Protocol::Tcp, true, None);
            }
        }
    }

    for mapping in &settings.ports {
        config.forwarded_port(
            mapping.guest,
            mapping.host,
            mapping.protocol.clone(),
            true,
            None,
        );
    }
}

fn configure_credentials(settings: &ResolvedSettings, config: &mut VagrantConfig) -> Result<()> {
    // Validate every declared path before the first provisioning step
    // is recorded, so a failed build never records a partial sequence.
    if let Some(paths) = &settings.authorize {
        if paths.is_empty() {
            return Err(LempError::empty_list("authorize"));
        }
        for path in paths {
            if !expand(path).exists() {
                return Err(LempError::missing_path("authorize", path.clone()));
            }
        }
    }
    if let Some(paths) = &settings.keys {
        if paths.is_empty() {
            return Err(LempError::empty_list("private key(s)"));
        }
        for path in paths {
            if !expand(path).exists() {
                return Err(LempError::missing_path("private key", path.clone()));
            }
        }
    }
    if settings.tokens.as_ref().is_some_and(|t| t.is_empty()) {
        return Err(LempError::empty_list("tokens"));
    }

    if let Some(paths) = &settings.authorize {
        for path in paths {
            let key = fs::read_to_string(expand(path))?;
            config.provision(Provisioner::inline(AUTHORIZED_KEYS_CMD).args([key]));
        }
    }

    if let Some(paths) = &settings.keys {
        for path in paths {
            let key = fs::read_to_string(expand(path))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            config.provision(
                Provisioner::inline(PRIVATE_KEY_CMD)
                    .args([key, filename])
                    .unprivileged(),
            );
        }
    }

    if let Some(tokens) = &settings.tokens {
        for token in tokens {
            config.provision(
                Provisioner::inline(COMPOSER_TOKEN_CMD)
                    .args([token.clone()])
                    .unprivileged(),
            );
        }
    }

    Ok(())
}

fn configure_sites(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    config.provision(Provisioner::script("clear-nginx.sh"));

    for site in &settings.sites {
        config.provision(
            Provisioner::script("create-certificate.sh")
                .named(format!("Creating Certificate: {}", site.map))
                .args([site.map.clone()]),
        );

        let site_type = if site.r#type == "symfony" {
            "symfony2"
        } else {
            site.r#type.as_str()
        };

        let args = if site_type == "angular" {
            vec![
                site.map.clone(),
                site.port.clone(),
                "80".to_string(),
                "443".to_string(),
            ]
        } else {
            vec![
                site.map.clone(),
                site.to.clone().unwrap_or_default(),
                site.port.clone(),
                site.ssl.clone(),
                site.php.clone(),
                render_params(&site.params),
                site.index.clone(),
                site.store.clone(),
            ]
        };

        config.provision(
            Provisioner::script(format!("serve-{}.sh", site_type))
                .named(format!("Creating Site: {}", site.map))
                .args(args),
        );
    }
}

fn configure_folders(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    for folder in &settings.folders {
        let map = expand(&folder.map);
        if map.exists() {
            config.synced_folder(map, folder);
            if folder.r#type.as_deref() == Some("nfs") {
                config.bind_folder(&folder.to, &folder.to);
            }
        } else {
            warn!(folder = %folder.map.display(), "shared folder source missing, degrading to a warning step");
            config.provision(Provisioner::inline(FOLDER_WARNING_CMD));
        }
    }
}

fn configure_variables(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    config.provision(Provisioner::script("clear-variables.sh").named("Clear Variables"));

    for variable in &settings.variables {
        for version in PHP_FPM_VERSIONS {
            config.provision(
                Provisioner::inline(format!(
                    "echo \"\nenv[$1] = '$2'\" >> /etc/php/{}/fpm/pool.d/www.conf",
                    version
                ))
                .args([variable.key.clone(), variable.value.clone()]),
            );
        }
        config.provision(
            Provisioner::inline(PROFILE_EXPORT_CMD)
                .args([variable.key.clone(), variable.value.clone()]),
        );
    }

    if !settings.variables.is_empty() {
        let restart = PHP_FPM_VERSIONS
            .iter()
            .map(|version| format!("service php{}-fpm restart;", version))
            .collect::<Vec<_>>()
            .join(" ");
        config.provision(Provisioner::inline(restart));
    }

    let restart_all = std::iter::once("sudo service nginx restart".to_string())
        .chain(
            PHP_FPM_VERSIONS
                .iter()
                .map(|version| format!("sudo service php{}-fpm restart", version)),
        )
        .collect::<Vec<_>>()
        .join("; ");
    config.provision(Provisioner::inline(restart_all).named("Restarting Nginx"));
}

fn configure_databases(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    for database in &settings.databases {
        config.provision(
            Provisioner::script("create-mysql.sh")
                .named(format!("Creating MySQL Database: {}", database))
                .args([database.clone()]),
        );
    }
}

fn configure_blackfire(settings: &ResolvedSettings, config: &mut VagrantConfig) {
    if let Some(credentials) = settings.blackfire.first() {
        config.provision(Provisioner::script("blackfire.sh").args([
            credentials.id.clone(),
            credentials.token.clone(),
            credentials.client_id.clone(),
            credentials.client_token.clone(),
        ]));
    }
}

fn render_params(params: &[SiteParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut rendered = String::from("(");
    for param in params {
        rendered.push_str(&format!(" [{}]={}", param.key, param.value));
    }
    rendered.push_str(" )");
    rendered
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
