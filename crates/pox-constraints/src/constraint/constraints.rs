//! Constraints - OR groups of AND-combined clauses

use std::fmt;
use std::str::FromStr;

use super::Clause;
use crate::error::{ConstraintError, Result};
use crate::rewrite;
use crate::version::Version;

/// A parsed constraint string such as `^1.2 || >= 2.5, != 2.5.3`
///
/// Groups separated by `||` are alternatives; clauses within a group separated
/// by `,` must all hold. A version satisfies the constraints when at least one
/// group accepts it.
#[derive(Debug, Clone)]
pub struct Constraints {
    groups: Vec<Vec<Clause>>,
    original: String,
}

impl Constraints {
    /// Parse a constraint string. Fails on the first clause that does not parse.
    pub fn new(constraints: &str) -> Result<Self> {
        if constraints.trim().is_empty() {
            return Err(ConstraintError::invalid_constraint(constraints, "empty constraint"));
        }

        let rewritten = rewrite::rewrite(constraints)?;
        if rewritten != constraints {
            log::debug!("Rewrote constraint \"{}\" to \"{}\"", constraints, rewritten);
        }

        let groups = rewritten
            .split("||")
            .map(|group| group.split(',').map(Clause::parse).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        log::trace!(
            "Parsed constraint \"{}\" into {} group(s)",
            constraints,
            groups.len()
        );

        Ok(Constraints {
            groups,
            original: constraints.to_string(),
        })
    }

    /// Check if a version satisfies the constraints
    pub fn check(&self, version: &Version) -> bool {
        self.groups
            .iter()
            .any(|group| group.iter().all(|clause| clause.check(version)))
    }

    /// The OR groups in source order
    pub fn groups(&self) -> &[Vec<Clause>] {
        &self.groups
    }

    /// The constraint string as given to [`Constraints::new`]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Expanded comparator form, e.g. `>=1.2.0, <2.0.0 || =3.0.0`
    pub fn canonical(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|clause| clause.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join(" || ")
    }
}

impl FromStr for Constraints {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self> {
        Constraints::new(s)
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Constraints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Constraints {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Constraints::new(&text).map_err(serde::de::Error::custom)
    }
}
