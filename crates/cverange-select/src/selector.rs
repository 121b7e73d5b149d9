//! Winner selection among ranked package-name candidates

use crate::registry::UpstreamLookup;
use cverange_common::EnrichConfig;
use cverange_core::{PackageNameCandidate, Result};
use cverange_nvd::{extract, CveDocument};
use cverange_version::{LenientVersion, VersionBound};
use std::collections::HashSet;
use tracing::debug;

/// Picks the winning package name for a CVE based on whether versions
/// mentioned in the record actually exist upstream.
///
/// Candidates are consumed in the ranking order supplied by the caller;
/// the first candidate whose published versions intersect the CVE's
/// declared version tokens wins. No scoring happens here.
pub struct VersionSelector<'a> {
    config: EnrichConfig,
    lookup: &'a dyn UpstreamLookup,
}

impl<'a> VersionSelector<'a> {
    /// Create a selector for one enrichment run.
    pub fn new(config: EnrichConfig, lookup: &'a dyn UpstreamLookup) -> Self {
        Self { config, lookup }
    }

    /// Pick a single winner, or none if every candidate fails the
    /// version check.
    ///
    /// When the CVE declares no version information at all there is no
    /// evidence to discriminate with, and the top-ranked candidate wins
    /// unconditionally. Version tokens match upstream versions under
    /// lenient equality, so `1.0.0` in the feed matches a published `1`.
    pub fn pick_winner<'c>(
        &self,
        cve: &CveDocument,
        candidates: &'c [PackageNameCandidate],
    ) -> Result<Option<&'c PackageNameCandidate>> {
        let declared = declared_versions(cve)?;

        if declared.is_empty() {
            debug!(cve = %cve.id, "no version information declared, top candidate wins");
            return Ok(candidates.first());
        }

        let declared: HashSet<LenientVersion> = declared
            .iter()
            .map(|token| LenientVersion::parse(token))
            .collect();

        for candidate in candidates {
            let upstream = self
                .lookup
                .versions(candidate.package(), self.config.ecosystem)?;
            debug!(
                cve = %cve.id,
                package = candidate.package(),
                count = upstream.len(),
                "fetched upstream versions"
            );

            let hit = upstream
                .iter()
                .any(|v| declared.contains(&LenientVersion::parse(v)));
            if hit {
                debug!(cve = %cve.id, package = candidate.package(), "version check hit");
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }
}

/// All version tokens named in the CVE's declared ranges, operators
/// stripped. Malformed range strings abort processing of this CVE.
fn declared_versions(cve: &CveDocument) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for node in extract(cve, true) {
        for specs in node {
            for spec in specs {
                versions.push(VersionBound::parse(&spec)?.version().to_string());
            }
        }
    }
    Ok(versions)
}
