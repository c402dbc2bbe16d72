//! Semver facade providing high-level version operations on plain strings

use crate::constraint::Constraints;
use crate::version::Version;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint. Unparseable input never satisfies.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let Ok(version) = Version::parse(version) else {
            return false;
        };

        match Constraints::new(constraints) {
            Ok(parsed) => parsed.check(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given constraints, in input order
    pub fn satisfied_by(versions: &[&str], constraints: &str) -> Vec<String> {
        let Ok(parsed) = Constraints::new(constraints) else {
            return Vec::new();
        };

        versions
            .iter()
            .filter(|v| Version::parse(v).is_ok_and(|version| parsed.check(&version)))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Unparseable versions are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
