use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::db::Database;
use crate::models::meal::MealRecord;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Sum calories and macros across the supplied meals. The caller is
/// responsible for pre-filtering to the desired day and user.
pub fn daily_totals(meals: &[MealRecord]) -> DailyTotals {
    let mut t = DailyTotals::default();
    for m in meals {
        t.calories += m.calories;
        t.protein += m.protein;
        t.carbs += m.carbs;
        t.fats += m.fats;
    }
    t
}

/// A day succeeds iff something was logged and total calories land in
/// (0, target]. Exactly hitting the target counts; exceeding it does not;
/// an empty day or all-zero-calorie logs do not.
pub fn is_successful_day(meals: &[MealRecord], target: f64) -> bool {
    if meals.is_empty() {
        return false;
    }
    let total: f64 = meals.iter().map(|m| m.calories).sum();
    total > 0.0 && total <= target
}

/// Monday on or before `date`. Pure; the weekly loop derives each day from
/// this anchor instead of mutating a shared date.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Success flag for each of the 7 days starting at `week_start`, evaluated
/// against the profile's current calorie target. "Today" lands wherever the
/// weekday puts it; index 0 is always Monday.
pub fn weekly_success(
    db: &Database,
    user_id: &str,
    week_start: NaiveDate,
    target: f64,
) -> Result<Vec<bool>> {
    let mut days = Vec::with_capacity(7);
    for i in 0..7 {
        let date = week_start + Duration::days(i);
        let meals = db.meals_for_day(user_id, date)?;
        days.push(is_successful_day(&meals, target));
    }
    Ok(days)
}

/// Consecutive successful days ending at `today_index`, walking backward.
/// Today itself may be unmet without breaking the streak (the day is not
/// over yet). Does not look past the start of the vector, so streaks never
/// cross the week boundary.
pub fn current_streak(days: &[bool], today_index: usize) -> u32 {
    if days.is_empty() {
        return 0;
    }
    let today_index = today_index.min(days.len() - 1);

    let mut streak = 0u32;
    for i in (0..=today_index).rev() {
        if days[i] {
            streak += 1;
        } else if i == today_index {
            continue;
        } else {
            break;
        }
    }
    streak
}
