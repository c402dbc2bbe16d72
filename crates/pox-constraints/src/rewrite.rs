//! Shorthand expansion
//!
//! Hyphen ranges, caret and tilde expressions are rewritten into plain
//! comparator clauses joined by commas before the constraint is split into
//! groups. Each pass leaves text it does not recognise untouched, so running a
//! pass on its own output is a no-op.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::grammar::{self, ANY_VERSION, CARET_RE, RANGE_RE, TILDE_RE};

/// Run the range, caret and tilde passes in order
pub fn rewrite(constraints: &str) -> Result<String> {
    let ranges = rewrite_ranges(constraints);
    let carets = rewrite_carets(&ranges)?;
    let tildes = rewrite_tildes(&carets)?;
    Ok(tildes.into_owned())
}

/// `1.2 - 2.3.4` --> `>= 1.2, <= 2.3.4`
pub fn rewrite_ranges(input: &str) -> Cow<'_, str> {
    RANGE_RE.replace_all(input, |caps: &Captures| {
        format!(">= {}, <= {}", &caps["from"], &caps["to"])
    })
}

/// ^, ^*, ^x --> >=0.0.0
/// ^2, ^2.x, ^2.x.x --> >= 2.0.0, < 3.0.0
/// ^1.2, ^1.2.x --> >= 1.2.0, < 2.0.0
/// ^1.2.3 --> >= 1.2.3, < 2.0.0
/// ^0.2.3 --> >= 0.2.3, < 1.0.0
pub fn rewrite_carets(input: &str) -> Result<Cow<'_, str>> {
    replace_each(&CARET_RE, input, |caps, matched| {
        let Some(parts) = Parts::from_captures(caps) else {
            return Ok(ANY_VERSION.to_string());
        };
        let upper = grammar::next_component(parts.major, matched)?;
        let lower = match (parts.minor, parts.patch) {
            (Some(minor), Some(patch)) => format!("{}.{}.{}", parts.major, minor, patch),
            (Some(minor), None) => format!("{}.{}.0", parts.major, minor),
            (None, _) => format!("{}.0.0", parts.major),
        };
        Ok(format!(">= {}{}, < {}.0.0", lower, parts.suffix, upper))
    })
}

/// ~, ~>, ~*, ~x --> >=0.0.0
/// ~2, ~2.x, ~>2 --> >= 2.0.0, < 3.0.0
/// ~1.2, ~1.2.x, ~>1.2 --> >= 1.2.0, < 1.3.0
/// ~1.2.3, ~>1.2.3 --> >= 1.2.3, < 1.3.0
pub fn rewrite_tildes(input: &str) -> Result<Cow<'_, str>> {
    replace_each(&TILDE_RE, input, |caps, matched| {
        let Some(parts) = Parts::from_captures(caps) else {
            return Ok(ANY_VERSION.to_string());
        };
        let Some(minor) = parts.minor else {
            let upper = grammar::next_component(parts.major, matched)?;
            return Ok(format!(">= {}.0.0{}, < {}.0.0", parts.major, parts.suffix, upper));
        };
        let upper = grammar::next_component(minor, matched)?;
        let lower = format!("{}.{}.{}", parts.major, minor, parts.patch.unwrap_or("0"));
        Ok(format!(">= {}{}, < {}.{}.0", lower, parts.suffix, parts.major, upper))
    })
}

/// Version components captured after a caret or tilde. A component is `None`
/// when it was omitted, when it is a wildcard, or when an earlier one was.
struct Parts<'t> {
    major: &'t str,
    minor: Option<&'t str>,
    patch: Option<&'t str>,
    suffix: &'t str,
}

impl<'t> Parts<'t> {
    /// Returns `None` when the major component is missing or a wildcard
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let concrete = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|component| !grammar::is_wildcard(component))
        };

        let major = concrete("major")?;
        let minor = concrete("minor");
        let patch = minor.and(concrete("patch"));

        Some(Parts {
            major,
            minor,
            patch,
            suffix: caps.name("suffix").map_or("", |m| m.as_str()),
        })
    }
}

/// Replace every match of `re` in a single left to right scan. The input is
/// borrowed back unchanged when nothing matches.
fn replace_each<'a, F>(re: &Regex, input: &'a str, mut expand: F) -> Result<Cow<'a, str>>
where
    F: FnMut(&Captures<'a>, &'a str) -> Result<String>,
{
    let mut output = String::new();
    let mut last = 0;
    let mut matched = false;

    for caps in re.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&input[last..whole.start()]);
        output.push_str(&expand(&caps, whole.as_str())?);
        last = whole.end();
        matched = true;
    }

    if !matched {
        return Ok(Cow::Borrowed(input));
    }

    output.push_str(&input[last..]);
    Ok(Cow::Owned(output))
}
