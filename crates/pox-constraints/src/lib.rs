//! Semantic version constraint matching
//!
//! This crate parses version constraint strings such as `^1.2 || >= 2.5, != 2.5.3`
//! and checks concrete versions against them. Caret (`^`), tilde (`~`, `~>`) and
//! hyphen (`1.0 - 2.0`) shorthand is expanded into plain comparator clauses before
//! parsing. Commas combine clauses with AND, `||` combines groups with OR.
//!
//! ```
//! use pox_constraints::{Constraints, Version};
//!
//! let constraints = Constraints::new("^1.2 || 3.0.0").unwrap();
//! assert!(constraints.check(&Version::parse("1.4.0").unwrap()));
//! assert!(!constraints.check(&Version::parse("2.0.0").unwrap()));
//! ```

pub mod constraint;
mod error;
mod grammar;
pub mod rewrite;
mod semver;
mod version;

pub use constraint::{Clause, Constraints, Operator};
pub use error::{ConstraintError, Result};
pub use semver::Semver;
pub use version::{Identifier, Version};
