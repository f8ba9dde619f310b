//! Plan generation.
//!
//! Turns a [`UserProfile`](crate::models::UserProfile) into a
//! [`WeeklyPlan`](crate::models::WeeklyPlan).
//!
//! # Pipeline
//!
//! ```text
//! goal ──► ratios_for ──► GoalRatios ─┐
//!                                      ├─► build_day × days ──► build_week ──► WeeklyPlan
//! equipment ──► CandidatePools ────────┘
//! ```
//!
//! `PlanSummary` derives presentation statistics from a finished plan.

mod daily;
mod pools;
mod ratios;
mod summary;
mod weekly;

pub use daily::build_day;
pub use pools::{candidates, CandidatePools};
pub use ratios::{ratios_for, GoalRatios};
pub use summary::PlanSummary;
pub use weekly::{build_week, WorkoutPlanner};
