//! Extraction of declared version ranges from a CVE's configuration tree

use crate::schema::CveDocument;

/// Walk the CVE's configuration tree and collect, per qualifying node,
/// the boundary-string lists its platform entries declare.
///
/// With `applications_only` set, a node qualifies when at least one of
/// its entries designates an application; otherwise every node
/// qualifies. Entries without any version-range declaration are skipped,
/// so a qualifying node with no declarations contributes an empty inner
/// list. Pure traversal, no I/O.
pub fn extract(cve: &CveDocument, applications_only: bool) -> Vec<Vec<Vec<String>>> {
    cve.configurations
        .iter()
        .filter(|node| !applications_only || node.designates_application())
        .map(|node| {
            node.entries
                .iter()
                .filter(|entry| !entry.version_range.is_empty())
                .map(|entry| entry.version_range.clone())
                .collect()
        })
        .collect()
}
