//! Weekly plan statistics.
//!
//! Derives the figures a presentation layer shows next to a plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Daily calories | Per-day calorie totals, in day order |
//! | Daily minutes | Per-day minute totals, in day order |
//! | Category share | Category minutes / weekly minutes |
//! | Avg minutes / calories | Weekly totals / number of days |
//! | Active days | Days with at least one exercise |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Category, WeeklyPlan};

/// Summary statistics for a weekly plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    /// `(day label, calories)` per day.
    pub daily_calories: Vec<(String, f64)>,
    /// `(day label, minutes)` per day.
    pub daily_minutes: Vec<(String, u32)>,
    /// Fraction of weekly minutes per category (0.0..1.0).
    pub category_share: BTreeMap<Category, f64>,
    /// Mean minutes per training day.
    pub avg_daily_minutes: f64,
    /// Mean calories per training day.
    pub avg_daily_calories: f64,
    /// Days with at least one exercise.
    pub active_days: usize,
    /// Weekly minutes.
    pub total_minutes: u32,
    /// Weekly calories.
    pub total_calories: f64,
}

impl PlanSummary {
    /// Computes statistics for a plan.
    pub fn calculate(plan: &WeeklyPlan) -> Self {
        let daily_calories = plan
            .days
            .iter()
            .map(|d| (d.label.clone(), d.total_calories))
            .collect();
        let daily_minutes = plan
            .days
            .iter()
            .map(|d| (d.label.clone(), d.total_minutes))
            .collect();

        let category_share = Category::ALL
            .iter()
            .map(|&c| {
                let share = if plan.total_minutes == 0 {
                    0.0
                } else {
                    plan.minutes_for(c) as f64 / plan.total_minutes as f64
                };
                (c, share)
            })
            .collect();

        let day_count = plan.days.len();
        let (avg_daily_minutes, avg_daily_calories) = if day_count == 0 {
            (0.0, 0.0)
        } else {
            (
                plan.total_minutes as f64 / day_count as f64,
                plan.total_calories / day_count as f64,
            )
        };

        Self {
            daily_calories,
            daily_minutes,
            category_share,
            avg_daily_minutes,
            avg_daily_calories,
            active_days: plan.days.iter().filter(|d| !d.is_empty()).count(),
            total_minutes: plan.total_minutes,
            total_calories: plan.total_calories,
        }
    }

    /// Share of weekly time for a category.
    pub fn share_of(&self, category: Category) -> f64 {
        self.category_share.get(&category).copied().unwrap_or(0.0)
    }

    /// Whether the week reaches the given minute and calorie targets.
    pub fn meets_targets(&self, min_weekly_minutes: u32, min_weekly_calories: f64) -> bool {
        self.total_minutes >= min_weekly_minutes && self.total_calories >= min_weekly_calories
    }
}
