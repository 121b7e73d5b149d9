//! CVERange Select - winner selection and the enrichment pipeline
//!
//! This crate wires the version reasoning engine to its collaborators:
//! - `UpstreamLookup`: the registry version-history supplier interface
//! - `VersionSelector`: picks the winning package name for a CVE
//! - `ranges_from_cve`: computes affected/safe ranges end to end

pub mod ranges;
pub mod registry;
pub mod selector;

pub use ranges::{intervals_from_cve, ranges_from_cve};
pub use registry::{StaticLookup, UpstreamLookup};
pub use selector::VersionSelector;
