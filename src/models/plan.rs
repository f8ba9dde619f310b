//! Plan (solution) model.
//!
//! A weekly plan is an ordered list of daily plans; each daily plan is
//! an ordered list of planned exercises with running totals. Weekly
//! aggregates are derived from the days when the plan is assembled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Category;

/// One exercise scheduled on a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Category the time was allocated from.
    pub category: Category,
    /// Exercise name (catalog key within `category`).
    pub name: String,
    /// Allocated duration (minutes).
    pub duration_minutes: u32,
    /// Calories: duration × the exercise's calories-per-minute.
    pub calories: f64,
}

impl PlannedExercise {
    /// Creates a planned exercise.
    pub fn new(
        category: Category,
        name: impl Into<String>,
        duration_minutes: u32,
        calories: f64,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            duration_minutes,
            calories,
        }
    }
}

/// A single training day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Zero-based day index.
    pub day_index: u32,
    /// Ordinal label ("Day 1", "Day 2", ...).
    pub label: String,
    /// Exercises in planning order (cardio, strength, flexibility).
    pub exercises: Vec<PlannedExercise>,
    /// Sum of exercise durations (minutes).
    pub total_minutes: u32,
    /// Sum of exercise calories.
    pub total_calories: f64,
}

impl DailyPlan {
    /// Creates an empty day.
    pub fn new(day_index: u32) -> Self {
        Self {
            day_index,
            label: format!("Day {}", day_index + 1),
            exercises: Vec::new(),
            total_minutes: 0,
            total_calories: 0.0,
        }
    }

    /// Appends an exercise and updates the totals.
    pub fn add_exercise(&mut self, exercise: PlannedExercise) {
        self.total_minutes += exercise.duration_minutes;
        self.total_calories += exercise.calories;
        self.exercises.push(exercise);
    }

    /// Whether no exercise was scheduled.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The exercise scheduled for a category, if any.
    pub fn exercise_for(&self, category: Category) -> Option<&PlannedExercise> {
        self.exercises.iter().find(|e| e.category == category)
    }

    /// Minutes allocated to a category on this day.
    pub fn minutes_for(&self, category: Category) -> u32 {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.duration_minutes)
            .sum()
    }
}

/// A full week of training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Training days in order.
    pub days: Vec<DailyPlan>,
    /// Sum of daily minutes.
    pub total_minutes: u32,
    /// Sum of daily calories.
    pub total_calories: f64,
    /// Minutes per category across the week. All categories present.
    pub category_minutes: BTreeMap<Category, u32>,
}

impl WeeklyPlan {
    /// Assembles a week from its days, deriving the aggregates.
    pub fn from_days(days: Vec<DailyPlan>) -> Self {
        let mut category_minutes: BTreeMap<Category, u32> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for day in &days {
            for ex in &day.exercises {
                *category_minutes.entry(ex.category).or_insert(0) += ex.duration_minutes;
            }
        }

        Self {
            total_minutes: days.iter().map(|d| d.total_minutes).sum(),
            total_calories: days.iter().map(|d| d.total_calories).sum(),
            category_minutes,
            days,
        }
    }

    /// Weekly minutes for a category.
    pub fn minutes_for(&self, category: Category) -> u32 {
        self.category_minutes.get(&category).copied().unwrap_or(0)
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of planned exercises.
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }
}
