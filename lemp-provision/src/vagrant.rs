use std::path::PathBuf;

use lemp_config::defaults::ResolvedFolder;
use lemp_config::settings::Protocol;

use crate::directive::{Directive, PrivateNetwork, Provisioner, ProviderCustomization};

/// The virtualization configuration object directives are recorded on.
///
/// Mirrors the surface a Vagrantfile drives (`config.vm.*`); recording
/// instead of rendering keeps the directive sequence inspectable and
/// leaves applying it to the virtualization tool.
#[derive(Debug, Default)]
pub struct VagrantConfig {
    directives: Vec<Directive>,
}

impl VagrantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forward_agent(&mut self) {
        self.directives.push(Directive::ForwardAgent);
    }

    pub fn define(&mut self, name: &str) {
        self.directives.push(Directive::Define {
            name: name.to_string(),
        });
    }

    pub fn set_box(&mut self, name: &str, version: &str) {
        self.directives.push(Directive::Box {
            name: name.to_string(),
            version: version.to_string(),
        });
    }

    pub fn hostname(&mut self, name: &str) {
        self.directives.push(Directive::Hostname {
            name: name.to_string(),
        });
    }

    pub fn private_network(&mut self, network: PrivateNetwork) {
        self.directives.push(Directive::PrivateNetwork(network));
    }

    pub fn network(
        &mut self,
        r#type: &str,
        ip: Option<&str>,
        bridge: Option<&str>,
        netmask: &str,
    ) {
        self.directives.push(Directive::Network {
            r#type: r#type.to_string(),
            ip: ip.map(String::from),
            bridge: bridge.map(String::from),
            netmask: netmask.to_string(),
        });
    }

    pub fn customize(&mut self, customization: ProviderCustomization) {
        self.directives.push(Directive::Provider(customization));
    }

    pub fn forwarded_port(
        &mut self,
        guest: u16,
        host: u16,
        protocol: Protocol,
        auto_correct: bool,
        id: Option<&str>,
    ) {
        self.directives.push(Directive::ForwardedPort {
            guest,
            host,
            protocol,
            auto_correct,
            id: id.map(String::from),
        });
    }

    pub fn provision(&mut self, provisioner: Provisioner) {
        self.directives.push(Directive::Provision(provisioner));
    }

    pub fn synced_folder(&mut self, map: PathBuf, folder: &ResolvedFolder) {
        self.directives.push(Directive::SyncedFolder {
            map,
            to: folder.to.clone(),
            r#type: folder.r#type.clone(),
            mount_options: folder.mount_options.clone(),
            owner: folder.options.owner.clone(),
            group: folder.options.group.clone(),
            create: folder.options.create,
        });
    }

    pub fn bind_folder(&mut self, source: &str, target: &str) {
        self.directives.push(Directive::BindFolder {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    /// The recorded directive sequence, in emission order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
    }

    /// Only the provisioning steps, in emission order.
    pub fn provisioners(&self) -> impl Iterator<Item = &Provisioner> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Provision(p) => Some(p),
            _ => None,
        })
    }
}
