use anyhow::Result;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::core::nutrition::{self, DailyTotals};
use crate::db::Database;

#[derive(Debug, Serialize)]
pub struct ReportResult {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days_logged: u32,
    pub total_meals: u32,
    pub totals: DailyTotals,
    /// Average per day that has at least one meal logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_avg: Option<DailyTotals>,
    pub target: f64,
    pub successful_days: u32,
}

/// Aggregate nutrition over an inclusive date range, one day bucket at a
/// time, evaluating each day against the current calorie target.
pub fn generate(
    db: &Database,
    user_id: &str,
    target: f64,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<ReportResult> {
    if from > to {
        anyhow::bail!("invalid range: from {} is after to {}", from, to);
    }

    let mut days_logged = 0u32;
    let mut total_meals = 0u32;
    let mut successful_days = 0u32;
    let mut totals = DailyTotals::default();

    let mut date = from;
    while date <= to {
        let meals = db.meals_for_day(user_id, date)?;
        if !meals.is_empty() {
            days_logged += 1;
            total_meals += meals.len() as u32;
            let day = nutrition::daily_totals(&meals);
            totals.calories += day.calories;
            totals.protein += day.protein;
            totals.carbs += day.carbs;
            totals.fats += day.fats;
        }
        if nutrition::is_successful_day(&meals, target) {
            successful_days += 1;
        }
        date += Duration::days(1);
    }

    let daily_avg = if days_logged > 0 {
        let n = f64::from(days_logged);
        Some(DailyTotals {
            calories: totals.calories / n,
            protein: totals.protein / n,
            carbs: totals.carbs / n,
            fats: totals.fats / n,
        })
    } else {
        None
    };

    Ok(ReportResult {
        from,
        to,
        days_logged,
        total_meals,
        totals,
        daily_avg,
        target,
        successful_days,
    })
}
