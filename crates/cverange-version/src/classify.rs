//! Classification of registry-published versions against CVE intervals

use crate::interval::VersionInterval;
use crate::lenient::LenientVersion;
use tracing::debug;

/// An upstream version labeled as affected or unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedVersion {
    /// Version string in its raw upstream-registry form
    pub version: String,
    /// Whether any CVE interval contains this version
    pub is_affected: bool,
}

impl ClassifiedVersion {
    /// Create a classified version.
    pub fn new(version: impl Into<String>, is_affected: bool) -> Self {
        Self {
            version: version.into(),
            is_affected,
        }
    }
}

/// Label every upstream version as affected or unaffected.
///
/// The input need not be sorted; the result is ascending by lenient
/// version order, with equal versions kept in raw-string order so the
/// output is deterministic regardless of input ordering. A version is
/// affected when *any* interval contains it, since one CVE may declare
/// several disjoint vulnerable ranges.
pub fn classify(
    upstream_versions: &[String],
    intervals: &[VersionInterval],
) -> Vec<ClassifiedVersion> {
    let mut sorted: Vec<(LenientVersion, &str)> = upstream_versions
        .iter()
        .map(|v| (LenientVersion::parse(v), v.as_str()))
        .collect();
    sorted.sort_by(|(a, a_raw), (b, b_raw)| a.cmp(b).then_with(|| a_raw.cmp(b_raw)));

    sorted
        .into_iter()
        .map(|(_, version)| {
            let is_affected = intervals.iter().any(|range| range.contains(version));
            if is_affected {
                debug!(version, "version is inside a declared vulnerable range");
            }
            ClassifiedVersion::new(version, is_affected)
        })
        .collect()
}
