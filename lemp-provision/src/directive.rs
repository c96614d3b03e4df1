use std::path::PathBuf;

use lemp_config::settings::Protocol;

/// A single instruction recorded against the Vagrant configuration
/// surface, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `config.vm.define`
    Define { name: String },
    /// `config.vm.box` / `config.vm.box_version`
    Box { name: String, version: String },
    /// `config.vm.hostname`
    Hostname { name: String },
    /// `config.ssh.forward_agent = true`
    ForwardAgent,
    /// The box's private network interface.
    PrivateNetwork(PrivateNetwork),
    /// An entry from the additional-networks list.
    Network {
        r#type: String,
        ip: Option<String>,
        bridge: Option<String>,
        netmask: String,
    },
    /// A provider-level `modifyvm`-style customization.
    Provider(ProviderCustomization),
    /// `config.vm.network "forwarded_port"`
    ForwardedPort {
        guest: u16,
        host: u16,
        protocol: Protocol,
        auto_correct: bool,
        id: Option<String>,
    },
    /// `config.vm.provision "shell"`
    Provision(Provisioner),
    /// `config.vm.synced_folder`
    SyncedFolder {
        map: PathBuf,
        to: String,
        r#type: Option<String>,
        mount_options: Vec<String>,
        owner: Option<String>,
        group: Option<String>,
        create: Option<bool>,
    },
    /// `config.bindfs.bind_folder` (nfs permission fix on macOS hosts)
    BindFolder { source: String, target: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrivateNetwork {
    Static { ip: String },
    /// Requested through the `autonetwork` sentinel.
    Auto,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCustomization {
    Name(String),
    Memory(String),
    Cpus(String),
    NatDnsProxy { on: bool },
    NatDnsHostResolver(String),
    OsType(String),
    Gui,
}

/// A shell provisioning step, inline or script-backed.
#[derive(Debug, Clone, PartialEq)]
pub struct Provisioner {
    pub name: Option<String>,
    pub run: ShellSource,
    pub args: Vec<String>,
    pub privileged: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellSource {
    /// An inline shell command.
    Inline(String),
    /// A script shipped with the box, named relative to its scripts
    /// directory.
    Script(String),
}

impl Provisioner {
    pub fn script(path: impl Into<String>) -> Self {
        Provisioner {
            name: None,
            run: ShellSource::Script(path.into()),
            args: Vec::new(),
            privileged: true,
        }
    }

    pub fn inline(command: impl Into<String>) -> Self {
        Provisioner {
            name: None,
            run: ShellSource::Inline(command.into()),
            args: Vec::new(),
            privileged: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn unprivileged(mut self) -> Self {
        self.privileged = false;
        self
    }

    /// The script this step runs, if it is script-backed.
    pub fn script_name(&self) -> Option<&str> {
        match &self.run {
            ShellSource::Script(path) => Some(path),
            ShellSource::Inline(_) => None,
        }
    }
}
