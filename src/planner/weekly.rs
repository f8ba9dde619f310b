//! Weekly plan aggregator and planner entry point.
//!
//! # Algorithm
//!
//! 1. Validate the profile's schedule parameters.
//! 2. Look up the goal's ratios and filter the catalog into pools once.
//! 3. Build one day per training day, reusing ratios and pools.
//! 4. Sum daily totals and per-category minutes into the week.

use tracing::{debug, info};

use super::{build_day, ratios_for, CandidatePools};
use crate::error::{Error, Result};
use crate::models::{Category, ExerciseCatalog, UserProfile, WeeklyPlan};
use crate::selection::{ExerciseSelector, UniformSelector};
use crate::validation::validate_profile;

/// Builds a week for an already validated profile.
pub fn build_week<S: ExerciseSelector + ?Sized>(
    profile: &UserProfile,
    pools: &CandidatePools<'_>,
    selector: &mut S,
) -> WeeklyPlan {
    let ratios = ratios_for(profile.goal);
    let days = (0..profile.days_per_week)
        .map(|day| build_day(day, profile.available_minutes, &ratios, pools, &mut *selector))
        .collect();
    WeeklyPlan::from_days(days)
}

/// Generates weekly plans against a borrowed catalog.
///
/// The planner holds no mutable state; every call is independent.
///
/// # Example
///
/// ```
/// use u_workout::models::{ExerciseCatalog, Goal, UserProfile};
/// use u_workout::planner::WorkoutPlanner;
///
/// let catalog = ExerciseCatalog::reference();
/// let planner = WorkoutPlanner::new(&catalog);
///
/// let profile = UserProfile::new(Goal::WeightLoss, 60, 3);
/// let plan = planner.generate_plan(&profile).unwrap();
/// assert_eq!(plan.days.len(), 3);
/// assert_eq!(plan.total_minutes, 180);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkoutPlanner<'c> {
    catalog: &'c ExerciseCatalog,
}

impl<'c> WorkoutPlanner<'c> {
    /// Creates a planner over `catalog`.
    pub fn new(catalog: &'c ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this planner draws from.
    pub fn catalog(&self) -> &'c ExerciseCatalog {
        self.catalog
    }

    /// Generates a plan using the thread-local random generator.
    ///
    /// # Errors
    /// `InvalidScheduleParameters` if days are outside 1..=7 or the
    /// daily budget is zero or longer than a day.
    pub fn generate_plan(&self, profile: &UserProfile) -> Result<WeeklyPlan> {
        self.generate_plan_with(profile, &mut UniformSelector::thread_local())
    }

    /// Generates a plan with an injected selector.
    pub fn generate_plan_with<S: ExerciseSelector + ?Sized>(
        &self,
        profile: &UserProfile,
        selector: &mut S,
    ) -> Result<WeeklyPlan> {
        if let Err(errors) = validate_profile(profile) {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::InvalidScheduleParameters(message));
        }

        let pools = CandidatePools::from_catalog(self.catalog, &profile.equipment);
        debug!(
            goal = %profile.goal,
            cardio = pools.pool(Category::Cardio).len(),
            strength = pools.pool(Category::Strength).len(),
            flexibility = pools.pool(Category::Flexibility).len(),
            "candidate pools ready"
        );

        let plan = build_week(profile, &pools, selector);
        info!(
            goal = %profile.goal,
            days = plan.day_count(),
            total_minutes = plan.total_minutes,
            total_calories = plan.total_calories,
            "workout plan generated"
        );
        Ok(plan)
    }
}
