use anyhow::Result;
use chrono::NaiveDate;

use openkcal::core::report;
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;
use openkcal::output::human;

pub fn run(from: NaiveDate, to: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let target = db
        .get_profile(&config.user)?
        .map_or(0.0, |p| p.caloric_intake);
    let result = report::generate(&db, &config.user, target, from, to)?;

    if human_flag {
        println!("{}", human::format_report(&result));
    } else {
        let out = output::success("report", serde_json::to_value(&result)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
