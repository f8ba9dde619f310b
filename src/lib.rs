//! Personalized weekly workout planning.
//!
//! Generates a multi-day exercise schedule from a user's goal, time
//! budget, weekly frequency and owned equipment, drawing from a static
//! catalog of cardio, strength and flexibility exercises.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ExerciseRecord`, `ExerciseCatalog`,
//!   `UserProfile`, `Goal`, `DailyPlan`, `WeeklyPlan`
//! - **`planner`**: Goal ratios, equipment filtering, daily and weekly
//!   plan building, summary statistics
//! - **`selection`**: Injected exercise choice (uniform random, fixed sequence)
//! - **`validation`**: Profile and catalog integrity checks
//! - **`export`**: Row-per-exercise table and CSV output
//!
//! # Example
//!
//! ```
//! use u_workout::models::{Equipment, ExerciseCatalog, Goal, UserProfile};
//! use u_workout::planner::{PlanSummary, WorkoutPlanner};
//!
//! let catalog = ExerciseCatalog::reference();
//! let profile = UserProfile::new(Goal::MuscleGain, 45, 4).with_equipment(Equipment::Dumbbell);
//!
//! let plan = WorkoutPlanner::new(&catalog).generate_plan(&profile).unwrap();
//! assert_eq!(plan.days.len(), 4);
//!
//! let summary = PlanSummary::calculate(&plan);
//! assert_eq!(summary.active_days, 4);
//! ```

pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod planner;
pub mod selection;
pub mod validation;

pub use error::{Error, Result};
