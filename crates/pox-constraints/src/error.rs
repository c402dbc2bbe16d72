use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    // Raised while building a constraint set, never while checking one
    #[error("Could not parse version constraint \"{constraint}\": {reason}")]
    InvalidConstraint { constraint: String, reason: String },

    // Raised by the version parser
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
}

impl ConstraintError {
    pub(crate) fn invalid_constraint(constraint: &str, reason: impl Into<String>) -> Self {
        ConstraintError::InvalidConstraint {
            constraint: constraint.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error was caused by malformed constraint text
    pub fn is_invalid_constraint(&self) -> bool {
        matches!(self, ConstraintError::InvalidConstraint { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConstraintError>;
