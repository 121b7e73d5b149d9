//! CVERange NVD - typed CVE documents and range extraction
//!
//! The feed-parsing collaborator hands the engine CVE records in the
//! statically shaped `CveDocument` tree defined here. This crate owns
//! that schema and the pure extraction of declared version ranges from
//! a record's configuration nodes.

pub mod extract;
pub mod schema;

pub use extract::extract;
pub use schema::{ConfigurationNode, CveDocument, Description, PlatformEntry, PlatformKind};
