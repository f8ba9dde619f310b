//! Tabular export of a weekly plan.
//!
//! Flattens a plan into one row per planned exercise with the columns
//! `day`, `exercise`, `category`, `duration_min`, `calories`. Calories
//! are rounded to the nearest whole number and suffixed with `kcal`.

use serde::Serialize;
use std::io::Write;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Day label ("Day 1", ...).
    pub day: String,
    /// Exercise name.
    pub exercise: String,
    /// Category label.
    pub category: String,
    /// Duration in minutes.
    pub duration_min: u32,
    /// Rounded calories with unit, e.g. "360kcal".
    pub calories: String,
}

/// Formats calories as a rounded integer with the `kcal` suffix.
pub fn format_calories(calories: f64) -> String {
    format!("{:.0}kcal", calories.round())
}

/// Flattens a plan into rows, day by day in planning order.
pub fn rows(plan: &WeeklyPlan) -> Vec<ExportRow> {
    plan.days
        .iter()
        .flat_map(|day| {
            day.exercises.iter().map(move |ex| ExportRow {
                day: day.label.clone(),
                exercise: ex.name.clone(),
                category: ex.category.label().to_string(),
                duration_min: ex.duration_minutes,
                calories: format_calories(ex.calories),
            })
        })
        .collect()
}

/// Writes the plan as CSV (with a header row) to `writer`.
pub fn write_csv<W: Write>(plan: &WeeklyPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let rows = rows(plan);
    if rows.is_empty() {
        wtr.write_record(["day", "exercise", "category", "duration_min", "calories"])?;
    }
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the plan as a CSV string.
pub fn to_csv_string(plan: &WeeklyPlan) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(plan, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
