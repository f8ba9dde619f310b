//! Goal policy: category time-allocation ratios.
//!
//! Each goal maps to a fixed split of the daily time budget across
//! cardio, strength and flexibility.
//!
//! | Goal | Cardio | Strength | Flexibility |
//! |------|--------|----------|-------------|
//! | weight-loss | 0.6 | 0.3 | 0.1 |
//! | muscle-gain | 0.2 | 0.7 | 0.1 |
//! | fitness-improvement | 0.5 | 0.4 | 0.1 |
//! | health-maintenance | 0.4 | 0.4 | 0.2 |
//! | stress-relief | 0.3 | 0.2 | 0.5 |
//!
//! Ratios are held as whole percentages so that allocation is exact
//! integer floor division (`90 × 0.7` is 63, not 62.999…).

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Category, Goal};

/// Time-allocation ratios for the three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalRatios {
    cardio_pct: u32,
    strength_pct: u32,
    flexibility_pct: u32,
}

impl GoalRatios {
    const fn pct(cardio_pct: u32, strength_pct: u32, flexibility_pct: u32) -> Self {
        Self {
            cardio_pct,
            strength_pct,
            flexibility_pct,
        }
    }

    /// Builds custom ratios from whole percentages.
    ///
    /// # Errors
    /// `InvalidRatios` unless the percentages sum to exactly 100.
    pub fn from_percentages(cardio_pct: u32, strength_pct: u32, flexibility_pct: u32) -> Result<Self> {
        let sum = cardio_pct
            .checked_add(strength_pct)
            .and_then(|s| s.checked_add(flexibility_pct));
        if sum != Some(100) {
            return Err(Error::InvalidRatios(format!(
                "percentages {cardio_pct}/{strength_pct}/{flexibility_pct} do not sum to 100"
            )));
        }
        Ok(Self::pct(cardio_pct, strength_pct, flexibility_pct))
    }

    /// Cardio fraction.
    pub fn cardio(&self) -> f64 {
        self.cardio_pct as f64 / 100.0
    }

    /// Strength fraction.
    pub fn strength(&self) -> f64 {
        self.strength_pct as f64 / 100.0
    }

    /// Flexibility fraction.
    pub fn flexibility(&self) -> f64 {
        self.flexibility_pct as f64 / 100.0
    }

    /// Fraction for a category.
    pub fn for_category(&self, category: Category) -> f64 {
        self.percent_for(category) as f64 / 100.0
    }

    /// Sum of the three fractions (1.0 for every valid instance).
    pub fn sum(&self) -> f64 {
        self.cardio() + self.strength() + self.flexibility()
    }

    /// Minutes allocated to a category: floor(available × ratio).
    #[inline]
    pub fn allocate(&self, category: Category, available_minutes: u32) -> u32 {
        let minutes = available_minutes as u64 * self.percent_for(category) as u64 / 100;
        minutes as u32
    }

    fn percent_for(&self, category: Category) -> u32 {
        match category {
            Category::Cardio => self.cardio_pct,
            Category::Strength => self.strength_pct,
            Category::Flexibility => self.flexibility_pct,
        }
    }
}

/// Ratios for a goal.
pub fn ratios_for(goal: Goal) -> GoalRatios {
    match goal {
        Goal::WeightLoss => GoalRatios::pct(60, 30, 10),
        Goal::MuscleGain => GoalRatios::pct(20, 70, 10),
        Goal::FitnessImprovement => GoalRatios::pct(50, 40, 10),
        Goal::HealthMaintenance => GoalRatios::pct(40, 40, 20),
        Goal::StressRelief => GoalRatios::pct(30, 20, 50),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_sum_to_one() {
        for goal in Goal::ALL {
            let r = ratios_for(goal);
            assert!((r.sum() - 1.0).abs() < 1e-9, "{goal}: {}", r.sum());
        }
    }

    #[test]
    fn test_ratio_table() {
        let r = ratios_for(Goal::MuscleGain);
        assert!((r.cardio() - 0.2).abs() < 1e-12);
        assert!((r.strength() - 0.7).abs() < 1e-12);
        assert!((r.flexibility() - 0.1).abs() < 1e-12);

        let r = ratios_for(Goal::StressRelief);
        assert!((r.for_category(Category::Flexibility) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_allocate_floor() {
        let r = ratios_for(Goal::MuscleGain);
        assert_eq!(r.allocate(Category::Cardio, 45), 9);
        assert_eq!(r.allocate(Category::Strength, 45), 31);
        assert_eq!(r.allocate(Category::Flexibility, 45), 4);
    }

    #[test]
    fn test_allocate_exact_multiple() {
        let r = ratios_for(Goal::MuscleGain);
        // floating point would give 62.99999999999999
        assert_eq!(r.allocate(Category::Strength, 90), 63);

        let r = ratios_for(Goal::WeightLoss);
        assert_eq!(r.allocate(Category::Cardio, 60), 36);
        assert_eq!(r.allocate(Category::Strength, 60), 18);
        assert_eq!(r.allocate(Category::Flexibility, 60), 6);
    }

    #[test]
    fn test_allocate_small_budget() {
        let r = ratios_for(Goal::WeightLoss);
        assert_eq!(r.allocate(Category::Cardio, 1), 0);
        assert_eq!(r.allocate(Category::Flexibility, 9), 0);
    }

    #[test]
    fn test_custom_percentages() {
        let r = GoalRatios::from_percentages(0, 100, 0).unwrap();
        assert_eq!(r.allocate(Category::Strength, 37), 37);
        assert_eq!(r.allocate(Category::Cardio, 37), 0);

        let err = GoalRatios::from_percentages(50, 50, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidRatios(_)));
    }

    #[test]
    fn test_custom_percentages_overflow() {
        let err = GoalRatios::from_percentages(u32::MAX, 1, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidRatios(_)));
        let err = GoalRatios::from_percentages(u32::MAX, u32::MAX, 102).unwrap_err();
        assert!(matches!(err, Error::InvalidRatios(_)));
    }
}
