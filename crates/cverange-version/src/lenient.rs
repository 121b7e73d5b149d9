//! Lenient version comparator
//!
//! Compares version strings the way vulnerability feeds treat them:
//! trailing zero components and a right-most release tag are not
//! significant. `1.0.0` equals `1`, `5.0.RELEASE` equals `5.0.0`,
//! `1.2.Final` equals `1.2.0`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One parsed component of a version string.
///
/// The variant order is the comparison order: an absent version sorts
/// below everything, and a numeric component sorts below a textual one
/// at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Segment {
    /// No version string was supplied at all (registry gap).
    Absent,
    Num(u64),
    Text(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Absent => Ok(()),
            Segment::Num(n) => write!(f, "{}", n),
            Segment::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A version string parsed into a comparable segment sequence.
///
/// Equality, ordering and hashing go through the parsed segments only;
/// the raw input is preserved verbatim for display. Empty and absent
/// inputs are distinct equivalence classes, and both differ from a
/// literal `"0"`. That asymmetry is inherited behavior the rest of the
/// pipeline depends on; see DESIGN.md before changing it.
#[derive(Debug, Clone)]
pub struct LenientVersion {
    raw: Option<String>,
    parsed: Vec<Segment>,
}

impl LenientVersion {
    /// Parse a raw version string.
    pub fn parse(raw: &str) -> Self {
        Self::parse_opt(Some(raw))
    }

    /// Parse an optional version string; `None` models a registry entry
    /// that carries no version at all.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        let parsed = match raw {
            None => vec![Segment::Absent],
            Some("") => vec![Segment::Text(String::new())],
            Some(s) => Self::parse_segments(s),
        };

        Self {
            raw: raw.map(String::from),
            parsed,
        }
    }

    /// The version string exactly as supplied, if any.
    pub fn exact(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Dot-joined significant segments (zeros and release tags stripped).
    pub fn canonical(&self) -> String {
        self.parsed
            .iter()
            .map(Segment::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    fn parse_segments(raw: &str) -> Vec<Segment> {
        let tokens = Self::tokenize(raw);

        // A purely textual leading token means the string is not a version
        // at all; keep the sequence as-is so it stays string-comparable
        // instead of crashing on malformed registry data.
        if matches!(tokens.first(), Some(Segment::Text(_))) {
            return tokens;
        }

        let mut significant: Vec<Segment> = Vec::new();
        let mut release_tag_seen = false;

        for token in tokens.into_iter().rev() {
            // Trailing zeros are not significant
            if significant.is_empty() && token == Segment::Num(0) {
                continue;
            }

            // The right-most textual token is a release tag ("Final",
            // "SNAPSHOT", "beta"); it and everything after it is dropped.
            if !release_tag_seen && matches!(token, Segment::Text(_)) {
                release_tag_seen = true;
                significant.clear();
                continue;
            }

            significant.push(token);
        }

        significant.reverse();

        if significant.is_empty() {
            significant.push(Segment::Num(0));
        }
        significant
    }

    /// Split on `.`/`-`/`_`, then into maximal digit and non-digit runs.
    /// Non-digit runs that end up adjacent merge into one segment.
    fn tokenize(raw: &str) -> Vec<Segment> {
        let mut tokens: Vec<Segment> = Vec::new();
        let mut digits = String::new();
        let mut text = String::new();

        let flush_digits = |tokens: &mut Vec<Segment>, digits: &mut String| {
            if digits.is_empty() {
                return;
            }
            match digits.parse::<u64>() {
                Ok(n) => tokens.push(Segment::Num(n)),
                // Digit run too large for u64; keep it as opaque text so
                // it stays ordered instead of being lost.
                Err(_) => Self::push_text(tokens, digits),
            }
            digits.clear();
        };
        let flush_text = |tokens: &mut Vec<Segment>, text: &mut String| {
            if !text.is_empty() {
                Self::push_text(tokens, text);
                text.clear();
            }
        };

        for part in raw.split(['.', '-', '_']) {
            for c in part.chars() {
                if c.is_ascii_digit() {
                    flush_text(&mut tokens, &mut text);
                    digits.push(c);
                } else {
                    flush_digits(&mut tokens, &mut digits);
                    text.push(c);
                }
            }
            flush_digits(&mut tokens, &mut digits);
            flush_text(&mut tokens, &mut text);
        }

        tokens
    }

    fn push_text(tokens: &mut Vec<Segment>, text: &str) {
        if let Some(Segment::Text(prev)) = tokens.last_mut() {
            prev.push_str(text);
        } else {
            tokens.push(Segment::Text(text.to_string()));
        }
    }
}

impl PartialEq for LenientVersion {
    fn eq(&self, other: &Self) -> bool {
        self.parsed == other.parsed
    }
}

impl Eq for LenientVersion {}

impl PartialOrd for LenientVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LenientVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parsed.cmp(&other.parsed)
    }
}

impl Hash for LenientVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parsed.hash(state);
    }
}

impl fmt::Display for LenientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}
