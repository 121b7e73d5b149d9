//! Run configuration for CVERange tools
//!
//! The engine crates take no configuration at all; this explicit value
//! is handed to the selector and the upstream-lookup collaborator at
//! construction time by whatever hosts them (batch runner, service).

use cverange_core::{Ecosystem, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one enrichment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichConfig {
    /// Ecosystem whose registry supplies upstream version history
    #[serde(default)]
    pub ecosystem: Ecosystem,

    /// Path to the downloaded vulnerability feed
    #[serde(default = "default_feed_path")]
    pub feed_path: PathBuf,

    /// Only process CVEs younger than this many days; 0 means no limit
    #[serde(default)]
    pub cve_age_days: u32,

    /// Restrict the run to a single CVE identifier
    #[serde(default)]
    pub cve_id: Option<String>,
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("nvdcve.json")
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            ecosystem: Ecosystem::default(),
            feed_path: default_feed_path(),
            cve_age_days: 0,
            cve_id: None,
        }
    }
}

impl EnrichConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Set the ecosystem
    pub fn ecosystem(mut self, ecosystem: Ecosystem) -> Self {
        self.ecosystem = ecosystem;
        self
    }

    /// Set the feed path
    pub fn feed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.feed_path = path.into();
        self
    }

    /// Restrict the run to one CVE
    pub fn cve_id(mut self, id: impl Into<String>) -> Self {
        self.cve_id = Some(id.into());
        self
    }
}
