// Standard library imports
use std::path::{Path, PathBuf};

// External crate imports
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use lemp_core::error::{LempError, Result};

// Helper to deserialize fields that accept both strings and numbers
// ("memory": "2048" and "memory": 2048 are both valid documents).
fn deserialize_option_string_or_number<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// The `Server.json` settings document.
///
/// Every field is optional; missing fields are filled in by the eager
/// [`Settings::resolved`](crate::defaults) pass, never at the point of
/// use. Unknown keys are preserved through `extra` so that documents
/// seeded from an `.example` file round-trip without losing user data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    // 1. Machine identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub box_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    // 2. Networking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Network>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ports: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortMapping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ssh_port: Option<u16>,

    // 3. Provider resources
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_option_string_or_number"
    )]
    pub memory: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_option_string_or_number"
    )]
    pub cpus: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub natdnshostresolver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gui: Option<bool>,

    // 4. Credentials
    //
    // `None` means "not declared"; `Some(vec![])` means "declared but
    // empty", which the configurator rejects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorize: Option<Vec<PathBuf>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<PathBuf>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,

    // 5. Provisioned content
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<Site>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<EnvVariable>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blackfire: Option<Vec<BlackfireCredentials>>,

    // 6. Extra/Custom
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// An additional network interface beyond the default private network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub r#type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
}

/// A single port forwarding rule.
///
/// The legacy field spellings `to` (guest) and `send` (host) are still
/// accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    #[serde(alias = "to")]
    pub guest: u16,

    #[serde(alias = "send")]
    pub host: u16,

    #[serde(default)]
    pub protocol: Protocol,
}

/// Network protocol for a port mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Tcp
    }
}

/// A shared folder mapping a host path into the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub map: PathBuf,

    pub to: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FolderOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<Vec<String>>,
}

/// Named synced-folder options forwarded to the virtualization layer.
///
/// Deliberately a closed set: an unrecognized option key stays in the
/// document's `extra` map instead of silently passing through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FolderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
}

/// An nginx site served from the box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub map: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_option_string_or_number"
    )]
    pub port: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_option_string_or_number"
    )]
    pub ssl: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_option_string_or_number"
    )]
    pub php: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<SiteParam>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// A single FastCGI parameter passed to a site's serve script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteParam {
    pub key: String,
    pub value: String,
}

/// An environment variable provisioned into the box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
}

/// Blackfire.io credential set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackfireCredentials {
    pub id: String,

    pub token: String,

    #[serde(rename = "client-id")]
    pub client_id: String,

    #[serde(rename = "client-token")]
    pub client_token: String,
}

impl Settings {
    /// Load a settings document from a JSON file.
    ///
    /// Fails with [`LempError::NotFound`] when the file is absent; a
    /// malformed document propagates as a serialization error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LempError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the settings document, pretty-printed, overwriting
    /// unconditionally.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
