//! A single comparator clause such as `>= 1.2.0` or `1.x`

use std::fmt;

use regex::Captures;

use super::Operator;
use crate::error::{ConstraintError, Result};
use crate::grammar::{self, CLAUSE_RE};
use crate::version::Version;

/// One operator applied to one bound version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    operator: Operator,
    bound: Version,
    // The text used x, X or * for the minor or patch component
    wildcard: bool,
}

impl Clause {
    /// Parse a clause in canonical form. Shorthand must already be expanded.
    pub fn parse(clause: &str) -> Result<Self> {
        let clause = clause.trim();
        let caps = CLAUSE_RE
            .captures(clause)
            .ok_or_else(|| ConstraintError::invalid_constraint(clause, "improper constraint"))?;

        let group = |name: &str| caps.name(name).map(|m| m.as_str());
        let (Some(major), Some(version)) = (group("major"), group("version")) else {
            return Err(ConstraintError::invalid_constraint(clause, "missing version"));
        };
        let minor = group("minor");
        let patch = group("patch");
        let suffix = group("suffix").unwrap_or("");

        for component in [Some(major), minor, patch].into_iter().flatten() {
            if !grammar::is_wildcard(component) {
                grammar::parse_component(component, clause)?;
            }
        }

        let (text, wildcard) = match (minor, patch) {
            (Some(minor), _) if grammar::is_wildcard(minor) => (format!("{}.0.0{}", major, suffix), true),
            (Some(minor), Some(patch)) if grammar::is_wildcard(patch) => {
                (format!("{}.{}.0{}", major, minor, suffix), true)
            }
            _ => (version.to_string(), false),
        };

        let bound = Version::parse(&text).map_err(|err| {
            log::error!(
                "Clause \"{}\" matched the constraint grammar but \"{}\" is not a valid version: {}",
                clause,
                text,
                err
            );
            err
        })?;

        let operator = operator_of(&caps)
            .ok_or_else(|| ConstraintError::invalid_constraint(clause, "unknown operator"))?;

        Ok(Clause {
            operator,
            bound,
            wildcard,
        })
    }

    /// Check if a version satisfies this clause
    pub fn check(&self, version: &Version) -> bool {
        self.operator.matches(version, &self.bound)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn bound(&self) -> &Version {
        &self.bound
    }

    /// Whether a wildcard component was materialized to zero while parsing
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}

fn operator_of(caps: &Captures<'_>) -> Option<Operator> {
    Operator::from_token(caps.name("op").map_or("", |m| m.as_str()))
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.bound)
    }
}
