//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `config.json` file format, plus the closed set of pinned components.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ManagerError;

/// Root configuration structure for `config.json`.
///
/// Both maps default to empty when absent. Top-level keys this tool does not
/// know about are kept in `extra` so a save never drops them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Currently pinned version per component, keyed `<component>_version`.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,

    /// Ordered candidate versions per component name.
    #[serde(default)]
    pub available_versions: BTreeMap<String, Vec<String>>,

    /// Unrecognised top-level keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Configuration {
    /// Pinned version for a component, if one has been chosen.
    pub fn default_for(&self, component: Component) -> Option<&str> {
        self.defaults.get(&component.defaults_key()).map(String::as_str)
    }

    /// Pinned version for a component, falling back to its built-in version.
    pub fn resolved_version(&self, component: Component) -> &str {
        self.default_for(component)
            .unwrap_or_else(|| component.fallback_version())
    }

    /// Candidate versions for a component (empty when none are listed).
    pub fn versions_for(&self, component: Component) -> &[String] {
        self.available_versions
            .get(component.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A versioned software unit whose version is pinned in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The GNS3 server.
    Gns3Server,
    /// The QEMU emulator.
    Qemu,
}

impl Component {
    /// Every known component, in menu order.
    pub const ALL: [Component; 2] = [Component::Gns3Server, Component::Qemu];

    /// Name used in `available_versions` and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gns3Server => "gns3_server",
            Self::Qemu => "qemu",
        }
    }

    /// Key under which the pinned version lives in `defaults`.
    pub fn defaults_key(&self) -> String {
        format!("{}_version", self.name())
    }

    /// Template placeholder name, also used as the docker build-arg name.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Gns3Server => "GNS3_SERVER_VERSION",
            Self::Qemu => "QEMU_VERSION",
        }
    }

    /// Version used when `defaults` has no entry for this component.
    pub fn fallback_version(&self) -> &'static str {
        match self {
            Self::Gns3Server => "2.2.40",
            Self::Qemu => "4.2.1",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gns3Server => "GNS3 Server",
            Self::Qemu => "QEMU",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = ManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "gns3_server" | "gns3" | "server" => Ok(Self::Gns3Server),
            "qemu" => Ok(Self::Qemu),
            _ => Err(ManagerError::UnknownComponent {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert!(config.defaults.is_empty());
        assert!(config.available_versions.is_empty());
    }

    #[test]
    fn parses_full_document() {
        let json = r#"{
            "defaults": {"gns3_server_version": "2.2.40", "qemu_version": "4.2.1"},
            "available_versions": {"qemu": ["4.2.1", "5.0.0"], "gns3_server": ["2.2.40"]}
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_for(Component::Qemu), Some("4.2.1"));
        assert_eq!(config.versions_for(Component::Qemu), ["4.2.1", "5.0.0"]);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let json = r#"{"defaults": {}, "maintainer": "lab-team"}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&config).unwrap();
        assert!(out.contains("\"maintainer\":\"lab-team\""));
    }

    #[test]
    fn defaults_must_be_strings() {
        let json = r#"{"defaults": {"qemu_version": 4}}"#;
        assert!(serde_json::from_str::<Configuration>(json).is_err());
    }

    #[test]
    fn resolved_version_uses_fallbacks() {
        let config = Configuration::default();
        assert_eq!(config.resolved_version(Component::Qemu), "4.2.1");
        assert_eq!(config.resolved_version(Component::Gns3Server), "2.2.40");
    }

    #[test]
    fn resolved_version_prefers_pinned_value() {
        let mut config = Configuration::default();
        config
            .defaults
            .insert("qemu_version".to_string(), "6.2.0".to_string());
        assert_eq!(config.resolved_version(Component::Qemu), "6.2.0");
    }

    #[test]
    fn versions_for_missing_component_is_empty() {
        let config = Configuration::default();
        assert!(config.versions_for(Component::Gns3Server).is_empty());
    }

    #[test]
    fn component_keys() {
        assert_eq!(Component::Gns3Server.defaults_key(), "gns3_server_version");
        assert_eq!(Component::Qemu.defaults_key(), "qemu_version");
        assert_eq!(Component::Qemu.placeholder(), "QEMU_VERSION");
    }

    #[test]
    fn component_from_str_accepts_aliases() {
        assert_eq!("qemu".parse::<Component>().unwrap(), Component::Qemu);
        assert_eq!(
            "gns3-server".parse::<Component>().unwrap(),
            Component::Gns3Server
        );
        assert_eq!("server".parse::<Component>().unwrap(), Component::Gns3Server);
        assert!("dynamips".parse::<Component>().is_err());
    }
}
