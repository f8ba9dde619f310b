//! Workout planning domain models.
//!
//! Provides the data types for describing who a plan is for, what can
//! be planned, and what was planned.
//!
//! # Domain Mappings
//!
//! | u-workout | Scheduling analogue |
//! |-----------|---------------------|
//! | ExerciseRecord | Activity template |
//! | Equipment | Resource requirement |
//! | UserProfile | Scheduling request |
//! | DailyPlan | Single-period schedule |
//! | WeeklyPlan | Multi-period schedule |

mod catalog;
mod exercise;
mod plan;
mod profile;

pub use catalog::ExerciseCatalog;
pub use exercise::{Category, Difficulty, Equipment, ExerciseRecord};
pub use plan::{DailyPlan, PlannedExercise, WeeklyPlan};
pub use profile::{BmiClass, FitnessLevel, Goal, UserProfile};
