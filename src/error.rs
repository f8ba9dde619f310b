//! Error types for plan generation and catalog handling.
//!
//! Only boundary conditions are errors: an unrecognized goal, schedule
//! parameters outside their allowed range, or a malformed catalog.
//! A category with no equipment-eligible exercise is *not* an error;
//! the planner simply omits it for that day.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the planner and its configuration edges.
#[derive(Debug, Error)]
pub enum Error {
    /// Goal label is not one of the recognized goals.
    #[error("invalid goal '{0}': expected one of weight-loss, muscle-gain, fitness-improvement, health-maintenance, stress-relief")]
    InvalidGoal(String),

    /// Training days or available minutes outside the allowed range.
    #[error("invalid schedule parameters: {0}")]
    InvalidScheduleParameters(String),

    /// Custom ratio triple does not describe a full allocation.
    #[error("invalid goal ratios: {0}")]
    InvalidRatios(String),

    /// Catalog failed integrity checks.
    #[error("invalid exercise catalog: {}", summarize(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// Unknown label for a closed enumeration (category, difficulty, fitness level).
    #[error("unknown {kind} '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_goal_message() {
        let err = Error::InvalidGoal("bulk".into());
        let msg = err.to_string();
        assert!(msg.contains("'bulk'"));
        assert!(msg.contains("weight-loss"));
    }

    #[test]
    fn test_invalid_catalog_joins_messages() {
        let err = Error::InvalidCatalog(vec![
            ValidationError::new(ValidationErrorKind::DuplicateName, "Duplicate exercise: a"),
            ValidationError::new(ValidationErrorKind::NonPositiveRate, "Rate of b is 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid exercise catalog: Duplicate exercise: a; Rate of b is 0"
        );
    }
}
