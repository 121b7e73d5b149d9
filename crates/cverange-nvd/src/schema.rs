//! Typed schema for CVE records as handed over by the feed parser
//!
//! The feed-parsing collaborator flattens the NVD document into this
//! statically shaped tree; nothing in the engine reaches into loose JSON
//! paths. Version constraints arrive pre-rendered as `<op><version>`
//! strings, one or two per platform entry.

use serde::{Deserialize, Serialize};

/// One CVE record with its structured configuration data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CveDocument {
    /// CVE identifier, e.g. `CVE-2018-11784`
    pub id: String,
    /// Per-language descriptions
    #[serde(default)]
    pub descriptions: Vec<Description>,
    /// Reference URLs
    #[serde(default)]
    pub references: Vec<String>,
    /// CVSS v3 base score, when the feed carries one
    #[serde(default)]
    pub cvss_v3_score: Option<f32>,
    /// Feed-declared configuration nodes
    #[serde(default)]
    pub configurations: Vec<ConfigurationNode>,
}

/// One description entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    pub lang: String,
    pub value: String,
}

/// A feed-declared group of platform/version constraints describing one
/// affected deployment scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationNode {
    #[serde(default)]
    pub entries: Vec<PlatformEntry>,
}

/// One platform designation inside a configuration node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEntry {
    /// What kind of platform the entry designates
    pub kind: PlatformKind,
    /// The platform identifier string, when present
    #[serde(default)]
    pub cpe: Option<String>,
    /// Raw version-range boundary strings (`<op><version>`), zero to two
    #[serde(default)]
    pub version_range: Vec<String>,
}

/// Platform kind tag: 'a' (application), 'o' (OS), 'h' (hardware).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
    Application,
    OperatingSystem,
    Hardware,
}

impl PlatformKind {
    /// Map a CPE part tag to a platform kind.
    pub fn from_cpe_part(part: char) -> Option<Self> {
        match part {
            'a' => Some(PlatformKind::Application),
            'o' => Some(PlatformKind::OperatingSystem),
            'h' => Some(PlatformKind::Hardware),
            _ => None,
        }
    }
}

impl CveDocument {
    /// CVE year and sequence number, split out of the identifier.
    pub fn year_and_number(&self) -> Option<(&str, &str)> {
        let mut parts = self.id.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(year), Some(number)) => Some((year, number)),
            _ => None,
        }
    }

    /// Description for the given language; entries without a language
    /// tag count as English.
    pub fn description(&self, lang: &str) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.lang == lang || (d.lang.is_empty() && lang == "en"))
            .map(|d| d.value.as_str())
    }

    /// All CPE identifiers declared by the CVE, optionally filtered to
    /// one platform kind.
    pub fn cpes(&self, kind: Option<PlatformKind>) -> Vec<&str> {
        self.configurations
            .iter()
            .flat_map(|node| node.entries.iter())
            .filter(|entry| kind.map_or(true, |k| entry.kind == k))
            .filter_map(|entry| entry.cpe.as_deref())
            .collect()
    }
}

impl ConfigurationNode {
    /// Whether any entry in the node designates an application.
    pub fn designates_application(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.kind == PlatformKind::Application)
    }
}
