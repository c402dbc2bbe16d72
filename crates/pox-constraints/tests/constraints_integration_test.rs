/// Integration tests for constraint parsing and matching
///
/// These exercise the public surface only: shorthand expansion, OR/AND
/// evaluation and the error contract of `Constraints::new`.

use pox_constraints::rewrite::{rewrite_carets, rewrite_ranges, rewrite_tildes};
use pox_constraints::{Constraints, ConstraintError, Operator, Version};

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

fn c(s: &str) -> Constraints {
    Constraints::new(s).unwrap()
}

fn sample_versions() -> Vec<Version> {
    let mut versions = Vec::new();
    for major in 0..4 {
        for minor in [0, 1, 2, 3, 10] {
            for patch in [0, 1, 3, 99] {
                versions.push(v(&format!("{}.{}.{}", major, minor, patch)));
            }
        }
    }
    versions.push(v("1.2.3-alpha"));
    versions.push(v("2.0.0-rc.1"));
    versions
}

#[test]
fn test_range_accepts_exactly_inclusive_interval() {
    let pairs = [("1.0.0", "2.0.0"), ("0.1.3", "0.1.3"), ("1.2.3", "3.10.0"), ("0.0.0", "1.2.3-alpha")];

    for (from, to) in pairs {
        let constraints = c(&format!("{} - {}", from, to));
        let (low, high) = (v(from), v(to));
        for version in sample_versions() {
            let expected = version >= low && version <= high;
            assert_eq!(constraints.check(&version), expected, "{} in [{}, {}]", version, from, to);
        }
    }
}

#[test]
fn test_caret_boundaries() {
    let constraints = c("^1.2.3");
    assert!(constraints.check(&v("1.2.3")));
    assert!(constraints.check(&v("1.9.9")));
    assert!(!constraints.check(&v("1.2.2")));
    assert!(!constraints.check(&v("2.0.0")));
}

#[test]
fn test_zero_major_caret_uses_major_rule() {
    let constraints = c("^0.2.3");
    assert!(constraints.check(&v("0.2.3")));
    assert!(constraints.check(&v("0.3.0")));
    assert!(constraints.check(&v("0.9.9")));
    assert!(!constraints.check(&v("0.2.2")));
    assert!(!constraints.check(&v("1.0.0")));
}

#[test]
fn test_tilde_boundaries() {
    let constraints = c("~1.2.3");
    assert!(constraints.check(&v("1.2.3")));
    assert!(constraints.check(&v("1.2.99")));
    assert!(!constraints.check(&v("1.2.2")));
    assert!(!constraints.check(&v("1.3.0")));

    let constraints = c("~1.2");
    assert!(constraints.check(&v("1.2.0")));
    assert!(constraints.check(&v("1.2.99")));
    assert!(!constraints.check(&v("1.3.0")));
    assert!(!constraints.check(&v("1.1.9")));
}

#[test]
fn test_tilde_and_arrow_are_identical() {
    for (tilde, arrow) in [("~1", "~>1"), ("~1.2", "~>1.2"), ("~1.2.3", "~>1.2.3")] {
        let (tilde, arrow) = (c(tilde), c(arrow));
        for version in sample_versions() {
            assert_eq!(tilde.check(&version), arrow.check(&version), "{}", version);
        }
    }
}

#[test]
fn test_bare_wildcard_is_equality_on_zeroed_version() {
    let constraints = c("1.x");
    assert!(constraints.check(&v("1.0.0")));
    assert!(!constraints.check(&v("1.2.0")));

    let clause = &constraints.groups()[0][0];
    assert_eq!(clause.operator(), Operator::Equal);
    assert!(clause.is_wildcard());

    // Through a comparison operator the zeroed bound behaves as usual
    let constraints = c(">=1.2.x, <2.x");
    assert!(constraints.check(&v("1.2.0")));
    assert!(constraints.check(&v("1.99.0")));
    assert!(!constraints.check(&v("2.0.0")));
}

#[test]
fn test_or_and_composition() {
    let constraints = c("1.0.0 - 2.0.0 || 3.0.0");
    assert!(constraints.check(&v("1.5.0")));
    assert!(constraints.check(&v("3.0.0")));
    assert!(!constraints.check(&v("2.5.0")));
    assert!(!constraints.check(&v("3.0.1")));

    let constraints = c("^1.2, != 1.4.0 || ~3.1, > 3.1.2");
    assert!(constraints.check(&v("1.3.0")));
    assert!(!constraints.check(&v("1.4.0")));
    assert!(constraints.check(&v("3.1.3")));
    assert!(!constraints.check(&v("3.1.2")));
}

#[test]
fn test_operator_aliases_are_interchangeable() {
    for (a, b) in [(">= 1.2.3", "=> 1.2.3"), ("<= 1.2.3", "=< 1.2.3"), ("1.2.3", "= 1.2.3")] {
        let (a, b) = (c(a), c(b));
        for version in sample_versions() {
            assert_eq!(a.check(&version), b.check(&version), "{}", version);
        }
    }
}

#[test]
fn test_malformed_input() {
    for input in ["not-a-version", ">= ", "", ">=1.0 ||", "1.0 - ", "^1.2 - 2.0", "=="] {
        match Constraints::new(input) {
            Err(ConstraintError::InvalidConstraint { .. }) => {}
            other => panic!("{:?} should be an invalid constraint, got {:?}", input, other),
        }
    }
}

#[test]
fn test_rewrite_passes_are_idempotent() {
    let inputs = [
        "1.2.3 - 2.3.4",
        "^1.2.3 || ^0.1",
        "~1.2, ~>3 || ~2.x",
        ">= 1.0, < 2.0",
        "1.2.3-4",
    ];
    for input in inputs {
        let once = rewrite_ranges(input).into_owned();
        assert_eq!(rewrite_ranges(&once).into_owned(), once);
        let once = rewrite_carets(input).unwrap().into_owned();
        assert_eq!(rewrite_carets(&once).unwrap().into_owned(), once);
        let once = rewrite_tildes(input).unwrap().into_owned();
        assert_eq!(rewrite_tildes(&once).unwrap().into_owned(), once);
    }
}

#[test]
fn test_prerelease_is_not_a_range() {
    let constraints = c("1.2.3-4");
    assert_eq!(constraints.groups().len(), 1);
    assert_eq!(constraints.groups()[0].len(), 1);
    assert!(constraints.check(&v("1.2.3-4")));
    assert!(!constraints.check(&v("1.2.3")));
}

#[test]
fn test_check_is_deterministic_across_threads() {
    let constraints = c("^1.2 || 3.0.0 - 3.5.0, != 3.2.0");
    let versions = sample_versions();
    let expected: Vec<bool> = versions.iter().map(|version| constraints.check(version)).collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let results: Vec<bool> = versions.iter().map(|version| constraints.check(version)).collect();
                assert_eq!(results, expected);
            });
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_uses_text_form() {
    let constraints = c("^1.2 || 3.x");
    let json = serde_json::to_string(&constraints).unwrap();
    assert_eq!(json, "\"^1.2 || 3.x\"");

    let back: Constraints = serde_json::from_str(&json).unwrap();
    assert_eq!(back.canonical(), constraints.canonical());

    assert!(serde_json::from_str::<Constraints>("\"bogus\"").is_err());

    let version: Version = serde_json::from_str("\"v1.2.3-rc.1\"").unwrap();
    assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.2.3-rc.1\"");
}
