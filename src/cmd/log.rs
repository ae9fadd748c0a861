use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use openkcal::core::logging::{LogMeal, log_batch, log_meal};
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;
use openkcal::output::human;

pub fn run(
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    health_score: f64,
    source: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let m = log_meal(
        &db,
        &config,
        LogMeal {
            name,
            calories,
            protein,
            carbs,
            fats,
            health_score,
            source,
            date,
        },
    )?;

    if human_flag {
        println!("Logged: {}", human::format_meal(&m));
    } else {
        let out = output::success(
            "log",
            json!({
                "meal": {
                    "id": m.id,
                    "created_at": m.created_at.to_rfc3339(),
                    "name": m.name,
                    "calories": m.calories,
                    "protein": m.protein,
                    "carbs": m.carbs,
                    "fats": m.fats,
                    "health_score": m.health_score
                }
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_batch(batch_json: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let meals = log_batch(&db, &config, batch_json)?;

    if human_flag {
        for m in &meals {
            println!("Logged: {}", human::format_meal(m));
        }
    } else {
        let entries: Vec<_> = meals
            .iter()
            .map(|m| {
                json!({
                    "id": m.id,
                    "name": m.name,
                    "calories": m.calories
                })
            })
            .collect();
        let out = output::success("log", json!({ "meals": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
