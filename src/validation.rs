//! Input validation for planning.
//!
//! Checks profile schedule parameters and catalog integrity before
//! planning. Detects:
//! - Training days outside 1..=7
//! - A daily time budget of zero or longer than a day
//! - Duplicate exercise names within a category
//! - Empty exercise names
//! - Non-positive or non-finite calorie rates
//!
//! All checks run; every detected issue is reported.

use std::collections::HashSet;

use crate::models::{ExerciseCatalog, UserProfile};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Maximum training days per week.
pub const MAX_DAYS_PER_WEEK: u32 = 7;

/// Maximum daily time budget (one day).
pub const MAX_MINUTES_PER_DAY: u32 = 24 * 60;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Training days per week outside 1..=7.
    DaysOutOfRange,
    /// Daily time budget is zero.
    NoAvailableTime,
    /// Daily time budget exceeds a day.
    TooMuchTime,
    /// Two exercises in one category share a name.
    DuplicateName,
    /// An exercise has an empty name.
    EmptyName,
    /// Calories-per-minute is zero, negative, or not finite.
    NonPositiveRate,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the schedule parameters of a profile.
///
/// Checks:
/// 1. `days_per_week` is within 1..=7
/// 2. `available_minutes` is within 1..=1440
///
/// Body measurements are range-checked by the input layer, not here.
pub fn validate_profile(profile: &UserProfile) -> ValidationResult {
    let mut errors = Vec::new();

    if !(1..=MAX_DAYS_PER_WEEK).contains(&profile.days_per_week) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DaysOutOfRange,
            format!(
                "training days per week must be within 1..={MAX_DAYS_PER_WEEK}, got {}",
                profile.days_per_week
            ),
        ));
    }

    if profile.available_minutes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoAvailableTime,
            "available minutes per day must be positive",
        ));
    } else if profile.available_minutes > MAX_MINUTES_PER_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooMuchTime,
            format!(
                "available minutes per day must be at most {MAX_MINUTES_PER_DAY}, got {}",
                profile.available_minutes
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates catalog integrity.
///
/// Checks, per category:
/// 1. No empty exercise names
/// 2. No duplicate names
/// 3. Every calorie rate is finite and positive
pub fn validate_catalog(catalog: &ExerciseCatalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (category, record) in catalog.iter() {
        if record.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Empty exercise name in category '{category}'"),
            ));
        } else if !seen.insert((category, record.name.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate exercise '{}' in category '{category}'", record.name),
            ));
        }

        if !record.calories_per_minute.is_finite() || record.calories_per_minute <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveRate,
                format!(
                    "Exercise '{}' has invalid calories per minute: {}",
                    record.name, record.calories_per_minute
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
