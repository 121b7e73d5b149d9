//! End-to-end range computation for one CVE and package

use crate::registry::UpstreamLookup;
use cverange_core::{Ecosystem, Error, Result};
use cverange_nvd::{extract, CveDocument};
use cverange_version::{affected_ranges, classify, safe_ranges, VersionInterval};
use tracing::debug;

/// Compute the affected and safe version ranges for a CVE against one
/// package's published version history.
///
/// Wires the whole engine together: extract the declared ranges from the
/// CVE's application configuration nodes, build intervals, fetch the
/// upstream versions, classify them, and compact the result. The
/// returned intervals render to the external notation via
/// `VersionInterval::render`.
pub fn ranges_from_cve(
    cve: &CveDocument,
    package: &str,
    ecosystem: Ecosystem,
    lookup: &dyn UpstreamLookup,
) -> Result<(Vec<VersionInterval>, Vec<VersionInterval>)> {
    if package.is_empty() {
        return Err(Error::EmptyPackageName);
    }

    let intervals = intervals_from_cve(cve)?;
    let upstream = lookup.versions(package, ecosystem)?;
    debug!(
        cve = %cve.id,
        package,
        intervals = intervals.len(),
        upstream = upstream.len(),
        "classifying upstream versions"
    );

    let classified = classify(&upstream, &intervals);
    let affected = affected_ranges(&classified)?;
    let safe = safe_ranges(&classified)?;

    Ok((affected, safe))
}

/// The version intervals declared by a CVE's application configuration
/// nodes.
pub fn intervals_from_cve(cve: &CveDocument) -> Result<Vec<VersionInterval>> {
    let mut intervals = Vec::new();
    for node in extract(cve, true) {
        for specs in node {
            intervals.push(VersionInterval::from_specs(&specs)?);
        }
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticLookup;
    use cverange_nvd::{ConfigurationNode, PlatformEntry, PlatformKind};

    fn cve_with_ranges(ranges: &[&str]) -> CveDocument {
        CveDocument {
            id: "CVE-2018-1000".to_string(),
            descriptions: vec![],
            references: vec![],
            cvss_v3_score: None,
            configurations: vec![ConfigurationNode {
                entries: vec![PlatformEntry {
                    kind: PlatformKind::Application,
                    cpe: None,
                    version_range: ranges.iter().map(|s| s.to_string()).collect(),
                }],
            }],
        }
    }

    fn rendered(ranges: &[VersionInterval]) -> Vec<String> {
        ranges.iter().map(VersionInterval::render).collect()
    }

    #[test]
    fn test_head_affected_run_is_unbounded_below() {
        let mut lookup = StaticLookup::new();
        lookup.insert("pkg-a", Ecosystem::Python, ["1", "2", "3", "4"]);

        let (affected, safe) = ranges_from_cve(
            &cve_with_ranges(&["<=2.1"]),
            "pkg-a",
            Ecosystem::Python,
            &lookup,
        )
        .unwrap();

        assert_eq!(rendered(&affected), ["<=2"]);
        assert_eq!(rendered(&safe), [">=3"]);
    }

    #[test]
    fn test_empty_upstream_history() {
        let lookup = StaticLookup::new();

        let (affected, safe) = ranges_from_cve(
            &cve_with_ranges(&["<=2.1"]),
            "pkg-a",
            Ecosystem::Python,
            &lookup,
        )
        .unwrap();

        assert!(affected.is_empty());
        assert!(safe.is_empty());
    }

    #[test]
    fn test_empty_package_name_rejected() {
        let lookup = StaticLookup::new();
        let err = ranges_from_cve(
            &cve_with_ranges(&["<=2.1"]),
            "",
            Ecosystem::Python,
            &lookup,
        )
        .unwrap_err();
        assert_eq!(err.code(), "EMPTY_PACKAGE_NAME");
    }
}
