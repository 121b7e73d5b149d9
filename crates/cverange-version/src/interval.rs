//! Version intervals and their external range notation

use crate::bound::{VersionBound, VersionOperator};
use cverange_core::{Error, Result};
use std::fmt;

/// A version interval built from one or two bounds.
///
/// A singleton interval stores the same bound twice. The two bounds are
/// kept in declaration order; rendering and containment recover their
/// upper/lower roles through the bound role ranking, so callers never
/// need to order them.
///
/// The rendered notation is consumed verbatim by the record writer:
/// `"==V"`, `"<=HI"`, `">=LO"` or `"<=HI,LO"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInterval {
    boundary_1: VersionBound,
    boundary_2: VersionBound,
}

impl VersionInterval {
    /// Build an interval from two bounds, in either order.
    pub fn from_pair(boundary_1: VersionBound, boundary_2: VersionBound) -> Self {
        Self {
            boundary_1,
            boundary_2,
        }
    }

    /// Build a singleton or half-open interval from one bound.
    pub fn from_singleton(boundary: VersionBound) -> Self {
        Self {
            boundary_1: boundary.clone(),
            boundary_2: boundary,
        }
    }

    /// Build an interval from the raw boundary strings of one feed range
    /// declaration (one or two of them).
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        match specs {
            [only] => Ok(Self::from_singleton(VersionBound::parse(only.as_ref())?)),
            [first, second] => Ok(Self::from_pair(
                VersionBound::parse(first.as_ref())?,
                VersionBound::parse(second.as_ref())?,
            )),
            _ => Err(Error::InvalidRangeDeclaration { count: specs.len() }),
        }
    }

    /// Build an interval anchored at the ends of a sorted version list.
    ///
    /// At least one side must be closed; `Error::IntervalNotClosed`
    /// otherwise. The upper anchor is the last element, the lower anchor
    /// the first.
    pub fn from_boundary_list<S: AsRef<str>>(
        versions: &[S],
        left_closed: bool,
        right_closed: bool,
    ) -> Result<Self> {
        if !left_closed && !right_closed {
            return Err(Error::IntervalNotClosed);
        }
        let (first, last) = match (versions.first(), versions.last()) {
            (Some(first), Some(last)) => (first.as_ref(), last.as_ref()),
            _ => return Err(Error::EmptyBoundaryList),
        };

        let upper = VersionBound::new(VersionOperator::Le, last);
        let lower = VersionBound::new(VersionOperator::Ge, first);

        Ok(match (left_closed, right_closed) {
            (true, true) => Self::from_pair(upper, lower),
            (false, true) => Self::from_singleton(upper),
            (true, false) => Self::from_singleton(lower),
            (false, false) => unreachable!(),
        })
    }

    /// Check whether a concrete version lies in the interval; every
    /// present bound must be satisfied.
    pub fn contains(&self, candidate: &str) -> bool {
        self.boundary_1.contains(candidate) && self.boundary_2.contains(candidate)
    }

    /// Render the interval in the external range notation.
    pub fn render(&self) -> String {
        if self.boundary_1.same_role(&self.boundary_2) {
            self.boundary_1.to_string()
        } else if self.boundary_2.outranks(&self.boundary_1) {
            format!("{},{}", self.boundary_2, self.boundary_1.version())
        } else {
            format!("{},{}", self.boundary_1, self.boundary_2.version())
        }
    }

    /// Version values named by the interval's bounds, operators stripped.
    pub fn versions(&self) -> Vec<&str> {
        if self.boundary_1.same_role(&self.boundary_2) {
            vec![self.boundary_1.version()]
        } else {
            vec![self.boundary_1.version(), self.boundary_2.version()]
        }
    }
}

impl fmt::Display for VersionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
