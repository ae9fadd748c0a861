use anyhow::Result;
use chrono::{Local, NaiveDate};

use openkcal::core::status;
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;
use openkcal::output::human;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let data = status::compute(&db, &config.user, today)?;

    if human_flag {
        println!("{}", human::format_status(&data));
    } else {
        let out = output::success("status", serde_json::to_value(&data)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
