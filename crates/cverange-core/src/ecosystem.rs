//! Supported package ecosystems

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Package ecosystem whose registry publishes the upstream version history.
///
/// The ecosystem decides which registry the upstream-lookup collaborator
/// talks to (Maven Central, PyPI, npm) and how ranking-tool output lines
/// are shaped. An unsupported ecosystem is unrepresentable here; string
/// input is validated once, at the `FromStr` boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Maven Central; package names are `groupId:artifactId` pairs
    Java,
    /// PyPI
    #[default]
    Python,
    /// npm
    JavaScript,
}

impl Ecosystem {
    /// Whether package names in this ecosystem carry a group ID prefix
    pub fn has_group_id(&self) -> bool {
        matches!(self, Ecosystem::Java)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ecosystem::Java => "java",
            Ecosystem::Python => "python",
            Ecosystem::JavaScript => "javascript",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Ecosystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Ecosystem::Java),
            "python" => Ok(Ecosystem::Python),
            "javascript" => Ok(Ecosystem::JavaScript),
            other => Err(Error::UnsupportedEcosystem(other.to_string())),
        }
    }
}
