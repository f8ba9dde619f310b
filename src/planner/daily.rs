//! Daily plan builder.
//!
//! # Algorithm
//!
//! For each category in planning order (cardio, strength, flexibility):
//! 1. Allocate `floor(available × ratio)` minutes.
//! 2. Skip the category if the allocation is zero.
//! 3. Skip the category if its candidate pool is empty.
//! 4. Select one exercise from the pool; calories = minutes × rate.
//! 5. Append it and accumulate the day's totals.
//!
//! Leftover minutes from flooring are not redistributed, so a day's
//! total never exceeds the budget and may fall short of it.

use tracing::debug;

use super::{CandidatePools, GoalRatios};
use crate::models::{Category, DailyPlan, PlannedExercise};
use crate::selection::ExerciseSelector;

/// Builds the plan for one day.
///
/// # Arguments
/// * `day_index` - Zero-based day index (labelled "Day {index + 1}").
/// * `available_minutes` - Daily time budget.
/// * `ratios` - Category allocation ratios.
/// * `pools` - Equipment-filtered candidates per category.
/// * `selector` - Source of the exercise choice.
pub fn build_day<S: ExerciseSelector + ?Sized>(
    day_index: u32,
    available_minutes: u32,
    ratios: &GoalRatios,
    pools: &CandidatePools<'_>,
    selector: &mut S,
) -> DailyPlan {
    let mut day = DailyPlan::new(day_index);

    for category in Category::ALL {
        let minutes = ratios.allocate(category, available_minutes);
        if minutes == 0 {
            continue;
        }

        let pool = pools.pool(category);
        let Some(record) = selector.select(category, pool) else {
            debug!(
                day = day_index + 1,
                %category,
                minutes,
                "no eligible exercise, category omitted"
            );
            continue;
        };

        day.add_exercise(PlannedExercise::new(
            category,
            record.name.clone(),
            minutes,
            record.calories_for(minutes),
        ));
    }

    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Equipment, ExerciseCatalog, ExerciseRecord, Goal};
    use crate::planner::ratios_for;
    use crate::selection::{SequenceSelector, UniformSelector};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    #[test]
    fn test_weight_loss_hour() {
        let catalog = ExerciseCatalog::reference();
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let mut sel = SequenceSelector::first();

        let day = build_day(0, 60, &ratios_for(Goal::WeightLoss), &pools, &mut sel);
        assert_eq!(day.label, "Day 1");
        assert_eq!(day.exercises.len(), 3);

        let cardio = &day.exercises[0];
        assert_eq!(cardio.category, Category::Cardio);
        assert_eq!(cardio.name, "running");
        assert_eq!(cardio.duration_minutes, 36);
        assert!((cardio.calories - 360.0).abs() < 1e-10);

        let strength = &day.exercises[1];
        assert_eq!(strength.category, Category::Strength);
        assert_eq!(strength.name, "push-ups");
        assert_eq!(strength.duration_minutes, 18);
        assert!((strength.calories - 144.0).abs() < 1e-10);

        let flex = &day.exercises[2];
        assert_eq!(flex.category, Category::Flexibility);
        assert_eq!(flex.name, "stretching");
        assert_eq!(flex.duration_minutes, 6);
        assert!((flex.calories - 12.0).abs() < 1e-10);

        assert_eq!(day.total_minutes, 60);
        assert!((day.total_calories - 516.0).abs() < 1e-10);
    }

    #[test]
    fn test_muscle_gain_45_minutes_no_equipment() {
        let catalog = ExerciseCatalog::reference();
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let mut sel = UniformSelector::new(SmallRng::seed_from_u64(3));

        let day = build_day(0, 45, &ratios_for(Goal::MuscleGain), &pools, &mut sel);
        assert_eq!(day.exercises.len(), 3);
        assert_eq!(day.minutes_for(Category::Cardio), 9);
        assert_eq!(day.minutes_for(Category::Strength), 31);
        assert_eq!(day.minutes_for(Category::Flexibility), 4);
        // 44 < 45: flooring drops the remainder
        assert_eq!(day.total_minutes, 44);

        let strength = day.exercise_for(Category::Strength).unwrap();
        let record = catalog.find(Category::Strength, &strength.name).unwrap();
        assert_eq!(record.equipment, Equipment::None);
    }

    #[test]
    fn test_empty_pool_omits_category() {
        let catalog = ExerciseCatalog::new()
            .with_exercise(
                Category::Cardio,
                ExerciseRecord::new("running", 10.0, Difficulty::Intermediate),
            )
            .with_exercise(
                Category::Strength,
                ExerciseRecord::new("bench press", 7.0, Difficulty::Advanced)
                    .with_equipment(Equipment::Bench),
            )
            .with_exercise(
                Category::Strength,
                ExerciseRecord::new("deadlift", 9.0, Difficulty::Advanced)
                    .with_equipment(Equipment::Barbell),
            )
            .with_exercise(
                Category::Flexibility,
                ExerciseRecord::new("stretching", 2.0, Difficulty::Beginner),
            );
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let mut sel = UniformSelector::new(SmallRng::seed_from_u64(11));

        let day = build_day(2, 45, &ratios_for(Goal::MuscleGain), &pools, &mut sel);
        assert_eq!(day.label, "Day 3");
        assert_eq!(day.exercises.len(), 2);
        assert!(day.exercise_for(Category::Strength).is_none());
        assert_eq!(day.total_minutes, 9 + 4);
        assert!((day.total_calories - (90.0 + 8.0)).abs() < 1e-10);
    }

    #[test]
    fn test_tiny_budget_yields_empty_day() {
        let catalog = ExerciseCatalog::reference();
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let mut sel = SequenceSelector::first();

        // 1 minute: 0.6, 0.3, 0.1 all floor to zero
        let day = build_day(0, 1, &ratios_for(Goal::WeightLoss), &pools, &mut sel);
        assert!(day.is_empty());
        assert_eq!(day.total_minutes, 0);
        assert!((day.total_calories - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_allocation_skips_without_selecting() {
        let catalog = ExerciseCatalog::reference();
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let ratios = GoalRatios::from_percentages(0, 100, 0).unwrap();
        // index 1 is consumed by the strength pick only
        let mut sel = SequenceSelector::new(vec![1, 0]);

        let day = build_day(0, 20, &ratios, &pools, &mut sel);
        assert_eq!(day.exercises.len(), 1);
        assert_eq!(day.exercises[0].name, "squats");
        assert_eq!(day.total_minutes, 20);
    }

    #[test]
    fn test_total_never_exceeds_budget() {
        let catalog = ExerciseCatalog::reference();
        let pools = CandidatePools::from_catalog(&catalog, &BTreeSet::new());
        let mut sel = UniformSelector::new(SmallRng::seed_from_u64(5));

        for goal in Goal::ALL {
            let ratios = ratios_for(goal);
            for minutes in 1..=180 {
                let day = build_day(0, minutes, &ratios, &pools, &mut sel);
                let sum: u32 = day.exercises.iter().map(|e| e.duration_minutes).sum();
                assert_eq!(sum, day.total_minutes);
                assert!(day.total_minutes <= minutes);
            }
        }
    }
}
