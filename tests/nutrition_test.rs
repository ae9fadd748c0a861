mod common;

use chrono::NaiveDate;
use openkcal::core::nutrition;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── daily totals ─────────────────────────────────────────────────────────────

#[test]
fn test_daily_totals_sums_all_macros() {
    let d = date(2026, 3, 2);
    let mut a = common::make_meal("Oatmeal", 350.0, d);
    a.protein = 12.0;
    a.carbs = 60.0;
    a.fats = 6.0;
    let mut b = common::make_meal("Chicken salad", 520.0, d);
    b.protein = 42.0;
    b.carbs = 18.0;
    b.fats = 30.0;

    let t = nutrition::daily_totals(&[a, b]);
    assert_eq!(t.calories, 870.0);
    assert_eq!(t.protein, 54.0);
    assert_eq!(t.carbs, 78.0);
    assert_eq!(t.fats, 36.0);
}

#[test]
fn test_daily_totals_empty_is_zero() {
    let t = nutrition::daily_totals(&[]);
    assert_eq!(t.calories, 0.0);
    assert_eq!(t.protein, 0.0);
}

// ── successful day ───────────────────────────────────────────────────────────

#[test]
fn test_empty_day_is_not_successful() {
    assert!(!nutrition::is_successful_day(&[], 2000.0));
}

#[test]
fn test_day_under_target_is_successful() {
    let meals = vec![common::make_meal("Dinner", 1800.0, date(2026, 3, 2))];
    assert!(nutrition::is_successful_day(&meals, 2000.0));
}

#[test]
fn test_day_exactly_on_target_is_successful() {
    let meals = vec![common::make_meal("Dinner", 2000.0, date(2026, 3, 2))];
    assert!(nutrition::is_successful_day(&meals, 2000.0));
}

#[test]
fn test_day_over_target_is_not_successful() {
    let meals = vec![common::make_meal("Feast", 2200.0, date(2026, 3, 2))];
    assert!(!nutrition::is_successful_day(&meals, 2000.0));
}

#[test]
fn test_zero_calorie_day_is_not_successful() {
    let meals = vec![
        common::make_meal("Water", 0.0, date(2026, 3, 2)),
        common::make_meal("Black coffee", 0.0, date(2026, 3, 2)),
    ];
    assert!(!nutrition::is_successful_day(&meals, 2000.0));
}

// ── start of week ────────────────────────────────────────────────────────────

#[test]
fn test_start_of_week_is_identity_on_monday() {
    // 2026-03-02 is a Monday
    assert_eq!(nutrition::start_of_week(date(2026, 3, 2)), date(2026, 3, 2));
}

#[test]
fn test_start_of_week_midweek() {
    // Wednesday 2026-03-04 -> Monday 2026-03-02
    assert_eq!(nutrition::start_of_week(date(2026, 3, 4)), date(2026, 3, 2));
}

#[test]
fn test_start_of_week_sunday_maps_back_six_days() {
    // Sunday 2026-03-08 belongs to the week starting Monday 2026-03-02
    assert_eq!(nutrition::start_of_week(date(2026, 3, 8)), date(2026, 3, 2));
}

#[test]
fn test_start_of_week_crosses_month_boundary() {
    // Sunday 2026-03-01 -> Monday 2026-02-23
    assert_eq!(nutrition::start_of_week(date(2026, 3, 1)), date(2026, 2, 23));
}

// ── weekly success vector ────────────────────────────────────────────────────

#[test]
fn test_weekly_success_marks_days_against_target() {
    let (_dir, db) = common::setup_db();
    let monday = date(2026, 3, 2);

    // Mon: 1800 (ok), Tue: 2400 (over), Wed: nothing, Thu: 2000 (exactly ok)
    db.insert_meal(&common::make_meal("Mon", 1800.0, monday)).unwrap();
    db.insert_meal(&common::make_meal("Tue", 2400.0, date(2026, 3, 3)))
        .unwrap();
    db.insert_meal(&common::make_meal("Thu", 2000.0, date(2026, 3, 5)))
        .unwrap();

    let days = nutrition::weekly_success(&db, common::USER, monday, 2000.0).unwrap();
    assert_eq!(days, vec![true, false, false, true, false, false, false]);
}

#[test]
fn test_weekly_success_ignores_other_weeks() {
    let (_dir, db) = common::setup_db();
    let monday = date(2026, 3, 2);

    db.insert_meal(&common::make_meal("Last week", 1500.0, date(2026, 2, 25)))
        .unwrap();
    db.insert_meal(&common::make_meal("Next week", 1500.0, date(2026, 3, 9)))
        .unwrap();

    let days = nutrition::weekly_success(&db, common::USER, monday, 2000.0).unwrap();
    assert_eq!(days, vec![false; 7]);
}

// ── streak ───────────────────────────────────────────────────────────────────

#[test]
fn test_streak_counts_consecutive_days_ending_today() {
    assert_eq!(nutrition::current_streak(&[true, true, true], 2), 3);
}

#[test]
fn test_streak_today_unmet_does_not_break() {
    // The day is not over; an unmet today keeps yesterday's streak alive
    assert_eq!(
        nutrition::current_streak(&[true, true, true, false], 3),
        3
    );
}

#[test]
fn test_streak_breaks_on_earlier_gap() {
    assert_eq!(
        nutrition::current_streak(&[true, true, false, true], 3),
        1
    );
}

#[test]
fn test_streak_gap_before_today_still_counts_today() {
    assert_eq!(
        nutrition::current_streak(&[false, true, true, true], 3),
        3
    );
}

#[test]
fn test_streak_all_unmet_is_zero() {
    assert_eq!(nutrition::current_streak(&[false; 7], 6), 0);
}

#[test]
fn test_streak_empty_vector_is_zero() {
    assert_eq!(nutrition::current_streak(&[], 0), 0);
}

#[test]
fn test_streak_clamps_out_of_range_today_index() {
    assert_eq!(nutrition::current_streak(&[true, true], 9), 2);
}
