//! Concrete semantic versions
//!
//! Accepts `v?MAJOR(.MINOR)?(.PATCH)?(-PRE)?(+BUILD)?`. Missing minor and patch
//! components default to zero. Build metadata is kept for display but never
//! takes part in ordering or equality.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ConstraintError, Result};

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(
        r"^v?(?P<major>\d+)(?:\.(?P<minor>\d+))?(?:\.(?P<patch>\d+))?(?:-(?P<pre>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// A single dot-separated prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// Purely numeric identifier, compared numerically
    Numeric(u64),
    /// Any other identifier, compared in ASCII order. Always ranks above numeric ones.
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(segment: &str) -> Self {
        if segment.bytes().all(|b| b.is_ascii_digit()) {
            // Too large for u64: fall back to lexical comparison
            if let Ok(n) = segment.parse() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(segment.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed semantic version
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Option<String>,
    original: String,
}

impl Version {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        let caps = VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| ConstraintError::InvalidVersion(version.to_string()))?;

        let component = |name: &str| -> Result<u64> {
            match caps.name(name) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| ConstraintError::InvalidVersion(version.to_string())),
                None => Ok(0),
            }
        };

        let pre: Vec<Identifier> = caps
            .name("pre")
            .map(|m| m.as_str().split('.').map(Identifier::parse).collect())
            .unwrap_or_default();

        Ok(Version {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
            pre,
            build: caps.name("build").map(|m| m.as_str().to_string()),
            original: trimmed.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers, empty for a release version
    pub fn prerelease(&self) -> &[Identifier] {
        &self.pre
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Check if this version carries prerelease identifiers
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// The text this version was parsed from, trimmed
    pub fn original(&self) -> &str {
        &self.original
    }
}

fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        // A release ranks above any of its prereleases
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(b),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.pre, &other.pre))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
    }
}

impl FromStr for Version {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(|id| id.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_full() {
        let version = v("1.2.3-beta.1+build.5");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(
            version.prerelease(),
            &[Identifier::AlphaNumeric("beta".to_string()), Identifier::Numeric(1)]
        );
        assert_eq!(version.build_metadata(), Some("build.5"));
        assert!(version.is_prerelease());
    }

    #[test]
    fn test_parse_partial_and_prefixed() {
        assert_eq!(v("1").to_string(), "1.0.0");
        assert_eq!(v("1.2").to_string(), "1.2.0");
        assert_eq!(v("v1.2.3").to_string(), "1.2.3");
        assert_eq!(v("v1.2.3").original(), "v1.2.3");
        assert_eq!(v(" 1.2.3 ").to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_fails() {
        for input in ["", "a.b.c", "1.2.3.4", "1.2.3-", "1.2.3+", "1..2", "1.x", "99999999999999999999"] {
            assert_eq!(
                Version::parse(input).unwrap_err(),
                ConstraintError::InvalidVersion(input.to_string()),
                "{input}"
            );
        }
    }

    #[test]
    fn test_compare_numeric() {
        assert!(v("1.2.3") < v("1.2.4"));
        assert!(v("1.2.3") < v("1.10.0"));
        assert!(v("2.0.0") > v("1.99.99"));
        assert_eq!(v("1.0"), v("1.0.0"));
    }

    #[test]
    fn test_compare_prerelease() {
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(v("1.2.3+build.1"), v("1.2.3+build.2"));
        assert_eq!(v("1.2.3+build.1").cmp(&v("1.2.3")), Ordering::Equal);
        assert_eq!(v("1.2.3+build.1").to_string(), "1.2.3+build.1");
    }
}
