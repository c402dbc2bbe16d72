//! Operator types for version constraints

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=, or no operator at all)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
    /// Greater than or equal (>=, =>)
    GreaterThanOrEqual,
    /// Less than or equal (<=, =<)
    LessThanOrEqual,
}

impl Operator {
    /// Look up the operator for a clause token. The empty token means equality.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" | "=" => Some(Operator::Equal),
            "!=" => Some(Operator::NotEqual),
            ">" => Some(Operator::GreaterThan),
            "<" => Some(Operator::LessThan),
            ">=" | "=>" => Some(Operator::GreaterThanOrEqual),
            "<=" | "=<" => Some(Operator::LessThanOrEqual),
            _ => None,
        }
    }

    /// All non-empty operator tokens, longest first
    pub fn tokens() -> &'static [&'static str] {
        &["!=", ">=", "=>", "<=", "=<", ">", "<", "="]
    }

    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Apply the operator to `version` with `bound` on the right hand side
    pub fn matches(&self, version: &Version, bound: &Version) -> bool {
        let ordering = version.cmp(bound);
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
