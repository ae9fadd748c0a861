#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use openkcal::db::Database;
use openkcal::models::meal::MealRecord;
use openkcal::models::profile::{ActivityLevel, Sex, UnitSystem, UserProfile};
use tempfile::TempDir;

pub const USER: &str = "local";

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Create a meal on a specific date (noon UTC).
pub fn make_meal(name: &str, calories: f64, date: NaiveDate) -> MealRecord {
    let dt = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    let ts = Utc.from_utc_datetime(&dt);
    make_meal_at(name, calories, ts)
}

/// Create a meal with an exact timestamp.
pub fn make_meal_at(name: &str, calories: f64, ts: DateTime<Utc>) -> MealRecord {
    let mut m = MealRecord::new(USER.to_string(), name.to_string(), calories);
    m.created_at = ts;
    m
}

/// The reference profile: 30yo male, 180 cm, 80 kg, moderately active.
/// bmi 24.7, bmr 1805, tdee 2798.
pub fn sample_profile() -> UserProfile {
    let mut p = UserProfile::new(USER.to_string());
    p.age = 30;
    p.sex = Sex::Male;
    p.height_raw = "180".to_string();
    p.weight_raw = 80.0;
    p.unit = UnitSystem::Metric;
    p.activity_level = ActivityLevel::ModeratelyActive;
    p
}
