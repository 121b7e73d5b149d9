//! Error types for the CVERange engine

use thiserror::Error;

/// Result type alias using CVERange Error
pub type Result<T> = std::result::Result<T, Error>;

/// CVERange error types
#[derive(Error, Debug)]
pub enum Error {
    // === Version range errors ===
    #[error("Malformed version bound: {spec}")]
    MalformedBound { spec: String },

    #[error("Interval is not closed from either side")]
    IntervalNotClosed,

    #[error("Cannot build an interval from an empty version list")]
    EmptyBoundaryList,

    #[error("A range declaration must hold one or two bounds, got {count}")]
    InvalidRangeDeclaration { count: usize },

    // === Candidate errors ===
    #[error("Package name must be a non-empty string")]
    EmptyPackageName,

    #[error("Invalid candidate score: {value}")]
    InvalidScore { value: String },

    #[error("Malformed candidate line: {line}")]
    MalformedCandidate { line: String },

    // === Ecosystem errors ===
    #[error("Unsupported ecosystem: {0}")]
    UnsupportedEcosystem(String),

    // === Collaborator errors ===
    #[error("Registry lookup failed for {package}: {message}")]
    RegistryLookup { package: String, message: String },

    // === Configuration errors ===
    #[error("Configuration error: {0}")]
    Configuration(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error should abort only the current CVE, not the batch.
    ///
    /// A malformed bound means the feed entry for one CVE is corrupt; the
    /// caller skips that record and keeps going. A registry failure is in
    /// the same category.
    pub fn aborts_cve_only(&self) -> bool {
        matches!(
            self,
            Error::MalformedBound { .. }
                | Error::InvalidRangeDeclaration { .. }
                | Error::RegistryLookup { .. }
        )
    }

    /// Check if this error is fatal (caller contract violation or broken setup)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::IntervalNotClosed | Error::EmptyBoundaryList | Error::Configuration(_)
        )
    }

    /// Get an error code for logging/metrics
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedBound { .. } => "MALFORMED_BOUND",
            Error::IntervalNotClosed => "INTERVAL_NOT_CLOSED",
            Error::EmptyBoundaryList => "EMPTY_BOUNDARY_LIST",
            Error::InvalidRangeDeclaration { .. } => "INVALID_RANGE_DECL",
            Error::EmptyPackageName => "EMPTY_PACKAGE_NAME",
            Error::InvalidScore { .. } => "INVALID_SCORE",
            Error::MalformedCandidate { .. } => "MALFORMED_CANDIDATE",
            Error::UnsupportedEcosystem(_) => "UNSUPPORTED_ECOSYSTEM",
            Error::RegistryLookup { .. } => "REGISTRY_LOOKUP",
            Error::Configuration(_) => "CONFIG_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = Error::MalformedBound {
            spec: "--".to_string(),
        };
        assert!(err.aborts_cve_only());
        assert!(!err.is_fatal());
        assert_eq!(err.code(), "MALFORMED_BOUND");

        let err = Error::IntervalNotClosed;
        assert!(err.is_fatal());
        assert!(!err.aborts_cve_only());
    }
}
