use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::models::meal::MealRecord;
use openkcal::output;
use openkcal::output::human;

pub fn run(
    last: Option<u32>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let meals: Vec<MealRecord> = if from.is_some() || to.is_some() {
        db.query_meals(&config.user, from, to)?
    } else if let Some(n) = last {
        db.recent_meals(&config.user, n)?
    } else {
        let d = date.unwrap_or_else(|| Local::now().date_naive());
        db.meals_for_day(&config.user, d)?
    };

    if human_flag {
        if meals.is_empty() {
            println!("No meals logged.");
        }
        for m in &meals {
            println!("{}", human::format_meal(m));
        }
    } else {
        let out = output::success("show", json!({ "meals": meals, "count": meals.len() }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
