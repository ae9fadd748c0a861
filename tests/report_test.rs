mod common;

use chrono::NaiveDate;
use openkcal::core::report;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_report_aggregates_range() {
    let (_dir, db) = common::setup_db();

    // Two meals on day one, one on day three, nothing on day two
    let mut a = common::make_meal("Breakfast", 400.0, date(2026, 3, 2));
    a.protein = 20.0;
    db.insert_meal(&a).unwrap();
    let mut b = common::make_meal("Dinner", 900.0, date(2026, 3, 2));
    b.protein = 40.0;
    db.insert_meal(&b).unwrap();
    db.insert_meal(&common::make_meal("Lunch", 2500.0, date(2026, 3, 4)))
        .unwrap();

    let r = report::generate(&db, common::USER, 2000.0, date(2026, 3, 2), date(2026, 3, 4))
        .unwrap();

    assert_eq!(r.days_logged, 2);
    assert_eq!(r.total_meals, 3);
    assert_eq!(r.totals.calories, 3800.0);
    assert_eq!(r.totals.protein, 60.0);
    // day one within target, day two empty, day three over
    assert_eq!(r.successful_days, 1);

    let avg = r.daily_avg.unwrap();
    assert_eq!(avg.calories, 1900.0);
    assert_eq!(avg.protein, 30.0);
}

#[test]
fn test_report_empty_range() {
    let (_dir, db) = common::setup_db();
    let r = report::generate(&db, common::USER, 2000.0, date(2026, 3, 2), date(2026, 3, 8))
        .unwrap();
    assert_eq!(r.days_logged, 0);
    assert_eq!(r.total_meals, 0);
    assert_eq!(r.successful_days, 0);
    assert!(r.daily_avg.is_none());
}

#[test]
fn test_report_rejects_inverted_range() {
    let (_dir, db) = common::setup_db();
    let result = report::generate(&db, common::USER, 2000.0, date(2026, 3, 8), date(2026, 3, 2));
    assert!(result.is_err());
}

#[test]
fn test_report_single_day_range() {
    let (_dir, db) = common::setup_db();
    db.insert_meal(&common::make_meal("Only", 1500.0, date(2026, 3, 2)))
        .unwrap();

    let r = report::generate(&db, common::USER, 2000.0, date(2026, 3, 2), date(2026, 3, 2))
        .unwrap();
    assert_eq!(r.days_logged, 1);
    assert_eq!(r.successful_days, 1);
}
