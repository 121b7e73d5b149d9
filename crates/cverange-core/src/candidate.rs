//! Package name candidates produced by the external ranking tool

use crate::ecosystem::Ecosystem;
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Package name candidate, with associated confidence score.
///
/// Candidates come out of an external full-text matching tool that ranks
/// possible package names for a CVE. The engine never scores them itself;
/// it only consumes them in the ranking order supplied by the caller.
#[derive(Debug, Clone)]
pub struct PackageNameCandidate {
    package: String,
    score: f64,
}

impl PackageNameCandidate {
    /// Create a new candidate. Rejects empty package names and
    /// non-finite scores at construction.
    pub fn new(package: impl Into<String>, score: f64) -> Result<Self> {
        let package = package.into();
        if package.is_empty() {
            return Err(Error::EmptyPackageName);
        }
        if !score.is_finite() {
            return Err(Error::InvalidScore {
                value: score.to_string(),
            });
        }
        Ok(Self { package, score })
    }

    /// Build a candidate from one output line of the ranking tool.
    ///
    /// Lines look like `"10.0 io.vertx:vertx-core"`. Ecosystems without
    /// group IDs prefix the package with `<ecosystem>:`, which is stripped.
    pub fn from_output_line(line: &str, ecosystem: Ecosystem) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let (score_str, package) = match (fields.next(), fields.next()) {
            (Some(score), Some(package)) => (score, package),
            _ => {
                return Err(Error::MalformedCandidate {
                    line: line.to_string(),
                })
            }
        };

        let score: f64 = score_str.parse().map_err(|_| Error::InvalidScore {
            value: score_str.to_string(),
        })?;

        let package = if ecosystem.has_group_id() {
            package
        } else {
            let prefix = format!("{}:", ecosystem);
            package.strip_prefix(&prefix).unwrap_or(package)
        };

        Self::new(package, score)
    }

    /// Package name
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Confidence score assigned by the ranking tool
    pub fn score(&self) -> f64 {
        self.score
    }
}

// Candidates order by score alone; the package name is not part of the
// ordering, matching how the ranking tool ties are left to output order.
impl PartialEq for PackageNameCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.score.total_cmp(&other.score) == Ordering::Equal
    }
}

impl Eq for PackageNameCandidate {}

impl PartialOrd for PackageNameCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageNameCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_validation() {
        assert!(PackageNameCandidate::new("flask", 10.0).is_ok());

        let err = PackageNameCandidate::new("", 10.0).unwrap_err();
        assert_eq!(err.code(), "EMPTY_PACKAGE_NAME");

        let err = PackageNameCandidate::new("flask", f64::NAN).unwrap_err();
        assert_eq!(err.code(), "INVALID_SCORE");
    }

    #[test]
    fn test_candidate_ordering() {
        let a = PackageNameCandidate::new("a", 10.0).unwrap();
        let b = PackageNameCandidate::new("b", 5.0).unwrap();
        let c = PackageNameCandidate::new("c", 10.0).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, c);
    }

    #[test]
    fn test_from_output_line_java() {
        let candidate =
            PackageNameCandidate::from_output_line("10.0 io.vertx:vertx-core", Ecosystem::Java)
                .unwrap();
        assert_eq!(candidate.package(), "io.vertx:vertx-core");
        assert_eq!(candidate.score(), 10.0);
    }

    #[test]
    fn test_from_output_line_strips_ecosystem_prefix() {
        let candidate =
            PackageNameCandidate::from_output_line("9.5 python:flask", Ecosystem::Python).unwrap();
        assert_eq!(candidate.package(), "flask");
        assert_eq!(candidate.score(), 9.5);
    }

    #[test]
    fn test_from_output_line_malformed() {
        let err =
            PackageNameCandidate::from_output_line("just-one-field", Ecosystem::Python).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_CANDIDATE");

        let err = PackageNameCandidate::from_output_line("abc flask", Ecosystem::Python).unwrap_err();
        assert_eq!(err.code(), "INVALID_SCORE");
    }
}
