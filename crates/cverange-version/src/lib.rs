//! CVERange Version - the version reasoning engine
//!
//! This crate reconciles the declarative version ranges a vulnerability
//! feed publishes against the concrete version history a package
//! registry has published:
//! - `LenientVersion`: tolerant parsing and total ordering of version strings
//! - `VersionBound` / `VersionInterval`: feed-declared range constraints
//! - `classify`: label every published version as affected or not
//! - `affected_ranges` / `safe_ranges`: minimal contiguous range sets in
//!   the external notation
//!
//! Everything here is a pure computation over in-memory data; no I/O.

pub mod bound;
pub mod classify;
pub mod compact;
pub mod interval;
pub mod lenient;

pub use bound::{VersionBound, VersionOperator};
pub use classify::{classify, ClassifiedVersion};
pub use compact::{affected_ranges, safe_ranges};
pub use interval::VersionInterval;
pub use lenient::LenientVersion;
