//! Exercise model.
//!
//! An exercise record is the smallest plannable unit: a named movement
//! with a calorie burn rate, a difficulty, and at most one piece of
//! required equipment. Records are reference data and never mutate
//! once a catalog is built.
//!
//! # Reference
//! Ainsworth et al. (2011), "Compendium of Physical Activities",
//! Med. Sci. Sports Exerc. 43(8)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Training category an exercise belongs to.
///
/// Declaration order is the fixed planning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cardio,
    Strength,
    Flexibility,
}

impl Category {
    /// All categories in planning order.
    pub const ALL: [Category; 3] = [Category::Cardio, Category::Strength, Category::Flexibility];

    /// Lowercase label used in exports and configuration.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cardio => "cardio",
            Category::Strength => "strength",
            Category::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardio" => Ok(Category::Cardio),
            "strength" => Ok(Category::Strength),
            "flexibility" => Ok(Category::Flexibility),
            _ => Err(Error::UnknownLabel {
                kind: "category",
                label: s.to_string(),
            }),
        }
    }
}

/// Exercise difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        })
    }
}

/// A piece of equipment an exercise may require.
///
/// `None` is the bodyweight sentinel: exercises requiring it are always
/// eligible. Labels outside the known set are kept in `Other`, trimmed,
/// lowercased and with `_` replaced by `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Equipment {
    /// Bodyweight, no equipment.
    None,
    Dumbbell,
    Barbell,
    Bench,
    PullUpBar,
    YogaMat,
    JumpRope,
    Bicycle,
    Treadmill,
    Pool,
    /// Domain-specific equipment label.
    Other(String),
}

impl Equipment {
    /// Kebab-case label.
    pub fn label(&self) -> &str {
        match self {
            Equipment::None => "none",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Barbell => "barbell",
            Equipment::Bench => "bench",
            Equipment::PullUpBar => "pull-up-bar",
            Equipment::YogaMat => "yoga-mat",
            Equipment::JumpRope => "jump-rope",
            Equipment::Bicycle => "bicycle",
            Equipment::Treadmill => "treadmill",
            Equipment::Pool => "pool",
            Equipment::Other(label) => label,
        }
    }

    /// Whether this is the bodyweight sentinel.
    #[inline]
    pub fn is_bodyweight(&self) -> bool {
        matches!(self, Equipment::None)
    }
}

impl From<String> for Equipment {
    fn from(label: String) -> Self {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "none" | "bodyweight" => Equipment::None,
            "dumbbell" => Equipment::Dumbbell,
            "barbell" => Equipment::Barbell,
            "bench" => Equipment::Bench,
            "pull-up-bar" | "pullup-bar" => Equipment::PullUpBar,
            "yoga-mat" => Equipment::YogaMat,
            "jump-rope" => Equipment::JumpRope,
            "bicycle" | "bike" => Equipment::Bicycle,
            "treadmill" => Equipment::Treadmill,
            "pool" => Equipment::Pool,
            _ => Equipment::Other(normalized),
        }
    }
}

impl From<&str> for Equipment {
    fn from(label: &str) -> Self {
        Equipment::from(label.to_string())
    }
}

impl From<Equipment> for String {
    fn from(equipment: Equipment) -> Self {
        equipment.label().to_string()
    }
}

impl FromStr for Equipment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Equipment::from(s))
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An exercise in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Name, unique within its category.
    pub name: String,
    /// Energy expenditure (kcal per minute). Must be positive.
    pub calories_per_minute: f64,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Required equipment (`None` = bodyweight).
    pub equipment: Equipment,
    /// Targeted muscle groups, if any (e.g., "chest, arms").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ExerciseRecord {
    /// Creates a bodyweight exercise.
    pub fn new(name: impl Into<String>, calories_per_minute: f64, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            calories_per_minute,
            difficulty,
            equipment: Equipment::None,
            target: None,
        }
    }

    /// Sets the required equipment.
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Sets the target muscle groups.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Calories burned over `minutes` of this exercise.
    #[inline]
    pub fn calories_for(&self, minutes: u32) -> f64 {
        minutes as f64 * self.calories_per_minute
    }
}
