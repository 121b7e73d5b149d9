//! Single-operator version bounds declared by the vulnerability feed

use crate::lenient::LenientVersion;
use cverange_core::{Error, Result};
use std::fmt;

/// Comparison operator of one feed-declared version bound.
///
/// A closed set; feed range strings carrying anything else are rejected
/// as corrupt at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionOperator {
    /// `==`
    Eq,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl VersionOperator {
    /// The literal operator token.
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionOperator::Eq => "==",
            VersionOperator::Le => "<=",
            VersionOperator::Ge => ">=",
            VersionOperator::Lt => "<",
            VersionOperator::Gt => ">",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" => Some(VersionOperator::Eq),
            "<=" => Some(VersionOperator::Le),
            ">=" => Some(VersionOperator::Ge),
            "<" => Some(VersionOperator::Lt),
            ">" => Some(VersionOperator::Gt),
            _ => None,
        }
    }

    /// Whether this operator closes an interval from above.
    pub fn closes_above(&self) -> bool {
        matches!(self, VersionOperator::Le | VersionOperator::Lt)
    }

    /// Whether this operator opens an interval from below.
    pub fn opens_below(&self) -> bool {
        matches!(self, VersionOperator::Ge | VersionOperator::Gt)
    }
}

impl fmt::Display for VersionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One operator+version constraint, e.g. `<=7.0.90`.
///
/// Bounds rank against each other by operator *role* only: an
/// upper-closing bound outranks a lower-opening one no matter what the
/// version values are. That is all interval assembly needs, since the
/// feed hands us the two boundaries of a range in arbitrary order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionBound {
    operator: VersionOperator,
    version: String,
}

impl VersionBound {
    /// Create a bound from parts.
    pub fn new(operator: VersionOperator, version: impl Into<String>) -> Self {
        Self {
            operator,
            version: version.into(),
        }
    }

    /// Parse a range string of the form `<op><version>`.
    ///
    /// The operator token is the leading run of `<`, `>` and `=`
    /// characters and must be one of `==`, `<=`, `>=`, `<`, `>`. A bare
    /// version with no operator at all is an `==` bound. Anything else
    /// is feed corruption and fails with `Error::MalformedBound`.
    pub fn parse(spec: &str) -> Result<Self> {
        let op_len = spec
            .chars()
            .take_while(|c| matches!(c, '<' | '>' | '='))
            .count();

        if op_len == 0 {
            return Ok(Self::new(VersionOperator::Eq, spec));
        }

        let (token, version) = spec.split_at(op_len);
        let operator = VersionOperator::from_token(token).ok_or_else(|| Error::MalformedBound {
            spec: spec.to_string(),
        })?;

        Ok(Self::new(operator, version))
    }

    /// The bound's operator.
    pub fn operator(&self) -> VersionOperator {
        self.operator
    }

    /// The bound's version value, as declared by the feed.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Check whether a concrete version satisfies this bound, under
    /// lenient version comparison.
    pub fn contains(&self, candidate: &str) -> bool {
        let bound = LenientVersion::parse(&self.version);
        let candidate = LenientVersion::parse(candidate);

        match self.operator {
            VersionOperator::Eq => candidate == bound,
            VersionOperator::Le => candidate <= bound,
            VersionOperator::Ge => candidate >= bound,
            VersionOperator::Lt => candidate < bound,
            VersionOperator::Gt => candidate > bound,
        }
    }

    /// Whether this bound plays the same role as `other` (identical
    /// operator). Version values are deliberately not compared.
    pub fn same_role(&self, other: &Self) -> bool {
        self.operator == other.operator
    }

    /// Whether this bound takes the upper slot when merged with `other`
    /// into an interval.
    pub fn outranks(&self, other: &Self) -> bool {
        self.operator.closes_above() && !other.operator.closes_above()
    }
}

impl fmt::Display for VersionBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
