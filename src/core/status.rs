use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::energy::{self, DerivedMetrics};
use crate::core::nutrition::{self, DailyTotals};
use crate::db::Database;

#[derive(Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub user: String,
    /// None until a profile exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<DerivedMetrics>,
    /// Selected plan's daily calorie target; 0 = no plan chosen.
    pub target: f64,
    pub today: TodayStatus,
    pub week: WeekStatus,
}

#[derive(Serialize)]
pub struct TodayStatus {
    pub meal_count: usize,
    pub totals: DailyTotals,
    pub successful: bool,
    /// Calories left before the target is exceeded; negative when over.
    pub remaining: f64,
}

#[derive(Serialize)]
pub struct WeekStatus {
    pub start: NaiveDate,
    /// Monday-first success flags; "today" lands at `today_index`.
    pub days: Vec<bool>,
    pub today_index: usize,
    pub streak: u32,
}

/// Compute the daily status overview: today's totals against the target,
/// plus the weekly success vector and current streak.
pub fn compute(db: &Database, user_id: &str, today: NaiveDate) -> Result<StatusData> {
    let profile = db.get_profile(user_id)?;
    let target = profile.as_ref().map_or(0.0, |p| p.caloric_intake);
    let metrics = profile.as_ref().map(energy::derive_metrics);

    let meals = db.meals_for_day(user_id, today)?;
    let totals = nutrition::daily_totals(&meals);
    let successful = nutrition::is_successful_day(&meals, target);

    let week_start = nutrition::start_of_week(today);
    let days = nutrition::weekly_success(db, user_id, week_start, target)?;
    let today_index = (today - week_start).num_days() as usize;
    let streak = nutrition::current_streak(&days, today_index);

    Ok(StatusData {
        date: today,
        user: user_id.to_string(),
        metrics,
        target,
        today: TodayStatus {
            meal_count: meals.len(),
            totals,
            successful,
            remaining: target - totals.calories,
        },
        week: WeekStatus {
            start: week_start,
            days,
            today_index,
            streak,
        },
    })
}
