//! Upstream version lookup collaborator interface

use cverange_core::{Ecosystem, Result};
use std::collections::HashMap;

/// Supplier of the version history a package registry has published.
///
/// The engine performs no I/O itself; implementations wrap the registry
/// HTTP clients (Maven Central, PyPI, npm) and own their retry and
/// caching policy. Calls are blocking. An empty list is a valid "nothing
/// published / package unknown" answer, not an error.
pub trait UpstreamLookup {
    /// Fetch all published versions for a package, in registry order.
    fn versions(&self, package: &str, ecosystem: Ecosystem) -> Result<Vec<String>>;
}

/// In-memory lookup backed by a map, for tests and offline runs.
#[derive(Debug, Default)]
pub struct StaticLookup {
    packages: HashMap<(String, Ecosystem), Vec<String>>,
}

impl StaticLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the version history for a package.
    pub fn insert<S: Into<String>>(
        &mut self,
        package: impl Into<String>,
        ecosystem: Ecosystem,
        versions: impl IntoIterator<Item = S>,
    ) {
        self.packages.insert(
            (package.into(), ecosystem),
            versions.into_iter().map(Into::into).collect(),
        );
    }
}

impl UpstreamLookup for StaticLookup {
    fn versions(&self, package: &str, ecosystem: Ecosystem) -> Result<Vec<String>> {
        Ok(self
            .packages
            .get(&(package.to_string(), ecosystem))
            .cloned()
            .unwrap_or_default())
    }
}
