//! Constraint types for version matching

mod clause;
mod constraints;
mod operator;

pub use clause::Clause;
pub use constraints::Constraints;
pub use operator::Operator;
