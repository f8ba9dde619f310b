//! Exercise catalog.
//!
//! The catalog is the planner's read-only reference data: three
//! categories, each an ordered list of [`ExerciseRecord`]s. It is built
//! once at startup, either from the built-in reference data or from a
//! JSON configuration file, and never mutated afterwards.
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "cardio": [
//!     { "name": "running", "calories_per_minute": 10, "difficulty": "intermediate", "equipment": "none" }
//!   ],
//!   "strength": [],
//!   "flexibility": []
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::{Category, Difficulty, Equipment, ExerciseRecord};
use crate::error::{Error, Result};
use crate::validation::validate_catalog;

/// Category-indexed collection of exercises.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseCatalog {
    categories: BTreeMap<Category, Vec<ExerciseRecord>>,
}

impl ExerciseCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exercise to a category.
    pub fn with_exercise(mut self, category: Category, record: ExerciseRecord) -> Self {
        self.categories.entry(category).or_default().push(record);
        self
    }

    /// Exercises in a category (empty slice if the category is absent).
    pub fn exercises(&self, category: Category) -> &[ExerciseRecord] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up an exercise by category and name.
    pub fn find(&self, category: Category, name: &str) -> Option<&ExerciseRecord> {
        self.exercises(category).iter().find(|r| r.name == name)
    }

    /// Iterates over `(category, record)` pairs in planning order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ExerciseRecord)> {
        self.categories
            .iter()
            .flat_map(|(c, records)| records.iter().map(move |r| (*c, r)))
    }

    /// Total number of exercises.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the catalog has no exercises.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses and validates a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        validate_catalog(&catalog).map_err(Error::InvalidCatalog)?;
        Ok(catalog)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            exercises = catalog.len(),
            "loaded exercise catalog"
        );
        Ok(catalog)
    }

    /// The built-in reference catalog.
    ///
    /// Every category contains at least one bodyweight exercise, so any
    /// profile gets a pool in every category.
    pub fn reference() -> Self {
        use Category::*;
        use Difficulty::*;

        Self::new()
            // Cardio
            .with_exercise(Cardio, ExerciseRecord::new("running", 10.0, Intermediate))
            .with_exercise(Cardio, ExerciseRecord::new("brisk walking", 6.0, Beginner))
            .with_exercise(
                Cardio,
                ExerciseRecord::new("cycling", 8.0, Intermediate).with_equipment(Equipment::Bicycle),
            )
            .with_exercise(
                Cardio,
                ExerciseRecord::new("jump rope", 12.0, Intermediate)
                    .with_equipment(Equipment::JumpRope),
            )
            .with_exercise(
                Cardio,
                ExerciseRecord::new("swimming", 11.0, Advanced).with_equipment(Equipment::Pool),
            )
            .with_exercise(Cardio, ExerciseRecord::new("stair climbing", 15.0, Advanced))
            .with_exercise(Cardio, ExerciseRecord::new("dance", 7.0, Beginner))
            .with_exercise(Cardio, ExerciseRecord::new("hiking", 9.0, Intermediate))
            // Strength
            .with_exercise(
                Strength,
                ExerciseRecord::new("push-ups", 8.0, Intermediate).with_target("chest, arms"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("squats", 9.0, Beginner).with_target("legs"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("plank", 5.0, Intermediate).with_target("core"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("burpee", 12.0, Advanced).with_target("full body"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("lunge", 8.0, Intermediate).with_target("legs"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("mountain climber", 10.0, Advanced).with_target("full body"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("dumbbell curl", 6.0, Intermediate)
                    .with_equipment(Equipment::Dumbbell)
                    .with_target("arms"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("deadlift", 9.0, Advanced)
                    .with_equipment(Equipment::Barbell)
                    .with_target("back, legs"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("bench press", 7.0, Advanced)
                    .with_equipment(Equipment::Bench)
                    .with_target("chest"),
            )
            .with_exercise(
                Strength,
                ExerciseRecord::new("pull-up", 10.0, Advanced)
                    .with_equipment(Equipment::PullUpBar)
                    .with_target("back, arms"),
            )
            // Flexibility
            .with_exercise(
                Flexibility,
                ExerciseRecord::new("yoga", 3.0, Beginner).with_equipment(Equipment::YogaMat),
            )
            .with_exercise(Flexibility, ExerciseRecord::new("stretching", 2.0, Beginner))
            .with_exercise(
                Flexibility,
                ExerciseRecord::new("pilates", 4.0, Intermediate).with_equipment(Equipment::YogaMat),
            )
            .with_exercise(Flexibility, ExerciseRecord::new("tai chi", 3.0, Intermediate))
    }
}
