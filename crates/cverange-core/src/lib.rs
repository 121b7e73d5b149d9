//! CVERange Core - Foundation types and error handling
//!
//! This crate provides the shared abstractions used throughout the
//! CVERange engine:
//! - `Error` / `Result`: the single error enum every crate propagates
//! - `Ecosystem`: the package ecosystems with version registries we query
//! - `PackageNameCandidate`: a ranked package-name guess for a CVE

pub mod candidate;
pub mod ecosystem;
pub mod error;

// Re-export commonly used types at crate root
pub use candidate::PackageNameCandidate;
pub use ecosystem::Ecosystem;
pub use error::{Error, Result};
