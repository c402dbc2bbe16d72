//! Shared grammar fragments and compiled patterns
//!
//! Every pattern uses named captures. The rewrite passes and the clause parser
//! look groups up by name only.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::Operator;
use crate::error::{ConstraintError, Result};

/// Prerelease and build metadata, both optional
const SUFFIX: &str = r"(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?";

/// A numeric component or one of the wildcard placeholders
const COMPONENT: &str = r"\d+|[xX*]";

/// Lower bound emitted for shorthand that places no restriction at all
pub(crate) const ANY_VERSION: &str = ">=0.0.0";

lazy_static! {
    // Concrete version with optional minor/patch, no wildcards, no captures
    static ref PLAIN_VERSION: String = format!(r"v?\d+(?:\.\d+)?(?:\.\d+)?{}", SUFFIX);

    // Version that may contain wildcards, any component after the operator may be missing
    static ref PARTIAL_VERSION: String = format!(
        r"v?(?P<major>{c})(?:\.(?P<minor>{c}))?(?:\.(?P<patch>{c}))?(?P<suffix>{s})",
        c = COMPONENT,
        s = SUFFIX
    );

    /// `A - B` hyphen ranges
    pub(crate) static ref RANGE_RE: Regex = Regex::new(&format!(
        r"(?P<from>{v})\s+-\s+(?P<to>{v})",
        v = *PLAIN_VERSION
    )).unwrap();

    /// `^`, with or without a version
    pub(crate) static ref CARET_RE: Regex = Regex::new(&format!(
        r"\^(?:{})?",
        *PARTIAL_VERSION
    )).unwrap();

    /// `~` and `~>`, with or without a version
    pub(crate) static ref TILDE_RE: Regex = Regex::new(&format!(
        r"~>?(?:{})?",
        *PARTIAL_VERSION
    )).unwrap();

    /// A single canonical clause: operator then a version whose minor or patch may be a wildcard
    pub(crate) static ref CLAUSE_RE: Regex = Regex::new(&format!(
        r"^(?P<op>{ops})?\s*(?P<version>v?(?P<major>\d+)(?:\.(?P<minor>{c}))?(?:\.(?P<patch>{c}))?(?P<suffix>{s}))$",
        ops = Operator::tokens()
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|"),
        c = COMPONENT,
        s = SUFFIX
    )).unwrap();
}

/// Check if a version component is a wildcard placeholder
pub(crate) fn is_wildcard(component: &str) -> bool {
    matches!(component, "x" | "X" | "*")
}

/// Parse a numeric version component, rejecting values that do not fit
pub(crate) fn parse_component(digits: &str, constraint: &str) -> Result<u64> {
    digits.parse().map_err(|_| {
        ConstraintError::invalid_constraint(constraint, format!("version component {} is out of range", digits))
    })
}

/// Parse a numeric version component and add one to it
pub(crate) fn next_component(digits: &str, constraint: &str) -> Result<u64> {
    parse_component(digits, constraint)?.checked_add(1).ok_or_else(|| {
        ConstraintError::invalid_constraint(constraint, format!("version component {} cannot be incremented", digits))
    })
}
