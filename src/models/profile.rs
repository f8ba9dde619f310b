//! User profile model.
//!
//! A profile captures who the plan is for and what they can commit to:
//! goal, experience, daily time budget, weekly frequency, and the
//! equipment they own. Body measurements feed the BMI snapshot shown
//! alongside a plan; they do not influence allocation.
//!
//! # Reference
//! WHO (2000), "Obesity: preventing and managing the global epidemic",
//! Technical Report Series 894 (BMI cut-off points)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::Equipment;
use crate::error::Error;

/// Training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    FitnessImprovement,
    HealthMaintenance,
    StressRelief,
}

impl Goal {
    /// All recognized goals.
    pub const ALL: [Goal; 5] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::FitnessImprovement,
        Goal::HealthMaintenance,
        Goal::StressRelief,
    ];

    /// Kebab-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight-loss",
            Goal::MuscleGain => "muscle-gain",
            Goal::FitnessImprovement => "fitness-improvement",
            Goal::HealthMaintenance => "health-maintenance",
            Goal::StressRelief => "stress-relief",
        }
    }

    /// Coaching tips shown next to a plan for this goal.
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            Goal::WeightLoss => &[
                "Drink enough water before and after each session",
                "Keep cardio consistent, but do not overdo it",
                "Use strength work to raise your basal metabolic rate",
            ],
            Goal::MuscleGain => &[
                "Eat protein within 30 minutes after training",
                "Get enough rest and sleep",
                "Increase training intensity gradually",
            ],
            Goal::FitnessImprovement => &[
                "Consistency matters most",
                "Raise intensity step by step",
                "Mix different exercises to avoid boredom",
            ],
            Goal::HealthMaintenance => &[
                "Stay steady and do not push too hard",
                "Stretch to prevent injuries",
                "Enjoy the session",
            ],
            Goal::StressRelief => &[
                "Train with music you like",
                "Try exercising outdoors",
                "Calm down with meditation or yoga afterwards",
            ],
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Goal::ALL
            .into_iter()
            .find(|g| g.label() == normalized)
            .ok_or_else(|| Error::InvalidGoal(s.to_string()))
    }
}

impl TryFrom<String> for Goal {
    type Error = Error;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.label().to_string()
    }
}

/// Self-reported training experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// Almost no training experience.
    Novice,
    /// Trains occasionally.
    #[default]
    Beginner,
    /// Trains regularly.
    Intermediate,
    /// Trains at a competitive level.
    Advanced,
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FitnessLevel::Novice => "novice",
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        })
    }
}

impl FromStr for FitnessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "novice" => Ok(FitnessLevel::Novice),
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            _ => Err(Error::UnknownLabel {
                kind: "fitness level",
                label: s.to_string(),
            }),
        }
    }
}

/// BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    /// Classifies a BMI value (thresholds 18.5 / 25 / 30).
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::Normal
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else {
            BmiClass::Obese
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BmiClass::Underweight => "underweight",
            BmiClass::Normal => "normal",
            BmiClass::Overweight => "overweight",
            BmiClass::Obese => "obese",
        })
    }
}

/// The person a plan is generated for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Body weight (kg).
    pub weight_kg: f64,
    /// Height (cm).
    pub height_cm: f64,
    /// Training goal.
    pub goal: Goal,
    /// Training experience.
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    /// Daily time budget (minutes).
    pub available_minutes: u32,
    /// Training days per week (1..=7).
    pub days_per_week: u32,
    /// Owned equipment. `Equipment::None` is implied.
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
}

impl UserProfile {
    /// Creates a profile with the given goal and schedule.
    ///
    /// Body measurements default to 25 years, 70 kg, 170 cm.
    pub fn new(goal: Goal, available_minutes: u32, days_per_week: u32) -> Self {
        Self {
            name: String::new(),
            age: 25,
            weight_kg: 70.0,
            height_cm: 170.0,
            goal,
            fitness_level: FitnessLevel::default(),
            available_minutes,
            days_per_week,
            equipment: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets age, weight (kg) and height (cm).
    pub fn with_body(mut self, age: u32, weight_kg: f64, height_cm: f64) -> Self {
        self.age = age;
        self.weight_kg = weight_kg;
        self.height_cm = height_cm;
        self
    }

    /// Sets the fitness level.
    pub fn with_fitness_level(mut self, level: FitnessLevel) -> Self {
        self.fitness_level = level;
        self
    }

    /// Adds an owned piece of equipment.
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment.insert(equipment);
        self
    }

    /// Body mass index: weight / height(m)^2.
    ///
    /// Returns `None` if height is not positive.
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm <= 0.0 {
            return None;
        }
        let height_m = self.height_cm / 100.0;
        Some(self.weight_kg / (height_m * height_m))
    }

    /// BMI classification, if BMI is defined.
    pub fn bmi_class(&self) -> Option<BmiClass> {
        self.bmi().map(BmiClass::from_bmi)
    }

    /// Whether the user owns (or does not need) the given equipment.
    pub fn has_equipment(&self, equipment: &Equipment) -> bool {
        equipment.is_bodyweight() || self.equipment.contains(equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let p = UserProfile::new(Goal::MuscleGain, 45, 4)
            .with_name("Kim")
            .with_body(30, 80.0, 180.0)
            .with_fitness_level(FitnessLevel::Intermediate)
            .with_equipment(Equipment::Dumbbell)
            .with_equipment(Equipment::Dumbbell);

        assert_eq!(p.name, "Kim");
        assert_eq!(p.age, 30);
        assert_eq!(p.goal, Goal::MuscleGain);
        assert_eq!(p.fitness_level, FitnessLevel::Intermediate);
        assert_eq!(p.available_minutes, 45);
        assert_eq!(p.days_per_week, 4);
        assert_eq!(p.equipment.len(), 1);
    }

    #[test]
    fn test_bmi() {
        let p = UserProfile::new(Goal::WeightLoss, 60, 3).with_body(25, 70.0, 170.0);
        // 70 / 1.7^2 = 24.22
        assert!((p.bmi().unwrap() - 24.221453).abs() < 1e-4);
        assert_eq!(p.bmi_class(), Some(BmiClass::Normal));
    }

    #[test]
    fn test_bmi_zero_height() {
        let p = UserProfile::new(Goal::WeightLoss, 60, 3).with_body(25, 70.0, 0.0);
        assert_eq!(p.bmi(), None);
        assert_eq!(p.bmi_class(), None);
    }

    #[test]
    fn test_bmi_thresholds() {
        assert_eq!(BmiClass::from_bmi(18.4), BmiClass::Underweight);
        assert_eq!(BmiClass::from_bmi(18.5), BmiClass::Normal);
        assert_eq!(BmiClass::from_bmi(24.99), BmiClass::Normal);
        assert_eq!(BmiClass::from_bmi(25.0), BmiClass::Overweight);
        assert_eq!(BmiClass::from_bmi(30.0), BmiClass::Obese);
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!("weight-loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("Muscle Gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert_eq!("stress_relief".parse::<Goal>().unwrap(), Goal::StressRelief);
        let err = "bulking".parse::<Goal>().unwrap_err();
        assert!(matches!(err, Error::InvalidGoal(ref g) if g == "bulking"));
    }

    #[test]
    fn test_goal_tips() {
        for goal in Goal::ALL {
            assert_eq!(goal.tips().len(), 3);
        }
    }

    #[test]
    fn test_has_equipment() {
        let p = UserProfile::new(Goal::WeightLoss, 60, 3).with_equipment(Equipment::YogaMat);
        assert!(p.has_equipment(&Equipment::None));
        assert!(p.has_equipment(&Equipment::YogaMat));
        assert!(!p.has_equipment(&Equipment::Barbell));
    }

    #[test]
    fn test_profile_json() {
        let json = r#"{
            "name": "Lee",
            "age": 28,
            "weight_kg": 62,
            "height_cm": 165,
            "goal": "stress-relief",
            "available_minutes": 30,
            "days_per_week": 2,
            "equipment": ["yoga-mat", "jump-rope"]
        }"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.goal, Goal::StressRelief);
        assert_eq!(p.fitness_level, FitnessLevel::Beginner);
        assert!(p.equipment.contains(&Equipment::JumpRope));
    }

    #[test]
    fn test_profile_json_invalid_goal() {
        let json = r#"{"age": 28, "weight_kg": 62, "height_cm": 165, "goal": "bulk",
                       "available_minutes": 30, "days_per_week": 2}"#;
        let err = serde_json::from_str::<UserProfile>(json).unwrap_err();
        assert!(err.to_string().contains("invalid goal 'bulk'"));
    }
}
