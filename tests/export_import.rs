mod common;

use chrono::NaiveDate;
use openkcal::core::export;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── export ───────────────────────────────────────────────────────────────────

#[test]
fn test_export_json_contains_all_meals() {
    let (_dir, db) = common::setup_db();
    db.insert_meal(&common::make_meal("A", 100.0, date(2026, 3, 2)))
        .unwrap();
    db.insert_meal(&common::make_meal("B", 200.0, date(2026, 3, 3)))
        .unwrap();

    let json = export::to_json(&db, common::USER, None, None).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["name"], "A");
    assert_eq!(parsed[1]["calories"], 200.0);
}

#[test]
fn test_export_json_respects_date_bounds() {
    let (_dir, db) = common::setup_db();
    db.insert_meal(&common::make_meal("In", 100.0, date(2026, 3, 2)))
        .unwrap();
    db.insert_meal(&common::make_meal("Out", 200.0, date(2026, 3, 9)))
        .unwrap();

    let json =
        export::to_json(&db, common::USER, Some(date(2026, 3, 1)), Some(date(2026, 3, 5)))
            .unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["name"], "In");
}

#[test]
fn test_export_csv_has_header_and_rows() {
    let (_dir, db) = common::setup_db();
    let mut m = common::make_meal("Oatmeal", 350.0, date(2026, 3, 2));
    m.protein = 12.0;
    db.insert_meal(&m).unwrap();

    let csv = export::to_csv(&db, common::USER, None, None).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "created_at,name,calories,protein,carbs,fats,health_score,source"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Oatmeal"));
    assert!(lines[1].contains("350"));
}

// ── import ───────────────────────────────────────────────────────────────────

#[test]
fn test_import_replaces_existing_history() {
    let (_dir, db) = common::setup_db();
    db.insert_meal(&common::make_meal("Old 1", 100.0, date(2026, 3, 2)))
        .unwrap();
    db.insert_meal(&common::make_meal("Old 2", 200.0, date(2026, 3, 3)))
        .unwrap();

    let json = r#"[
        {"name": "New", "calories": 640.0, "protein": 30.0,
         "created_at": "2026-03-04T12:00:00Z"}
    ]"#;
    let (deleted, inserted) = export::import_json(&db, common::USER, json).unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(inserted, 1);

    let meals = db.query_meals(common::USER, None, None).unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name, "New");
    assert_eq!(meals[0].protein, 30.0);
    assert_eq!(meals[0].source, "import");
}

#[test]
fn test_import_defaults_optional_fields() {
    let (_dir, db) = common::setup_db();
    let json = r#"[{"name": "Bare", "calories": 300.0}]"#;
    let (_, inserted) = export::import_json(&db, common::USER, json).unwrap();
    assert_eq!(inserted, 1);

    let meals = db.query_meals(common::USER, None, None).unwrap();
    assert_eq!(meals[0].protein, 0.0);
    assert_eq!(meals[0].health_score, 0.0);
}

#[test]
fn test_import_clamps_health_score() {
    let (_dir, db) = common::setup_db();
    let json = r#"[{"name": "Kale", "calories": 50.0, "health_score": 14.0}]"#;
    export::import_json(&db, common::USER, json).unwrap();

    let meals = db.query_meals(common::USER, None, None).unwrap();
    assert_eq!(meals[0].health_score, 10.0);
}

#[test]
fn test_import_invalid_json_errors() {
    let (_dir, db) = common::setup_db();
    assert!(export::import_json(&db, common::USER, "not json").is_err());
}

#[test]
fn test_export_then_import_round_trip() {
    let (_dir, db) = common::setup_db();
    let mut m = common::make_meal("Pasta", 820.0, date(2026, 3, 2));
    m.carbs = 110.0;
    db.insert_meal(&m).unwrap();

    let json = export::to_json(&db, common::USER, None, None).unwrap();
    let (deleted, inserted) = export::import_json(&db, common::USER, &json).unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(inserted, 1);

    let meals = db.query_meals(common::USER, None, None).unwrap();
    assert_eq!(meals[0].name, "Pasta");
    assert_eq!(meals[0].carbs, 110.0);
    assert_eq!(meals[0].created_at, m.created_at);
}
