use anyhow::Result;
use serde_json::json;

use openkcal::core::{body, energy};
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;
use openkcal::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let profile = db
        .get_profile(&config.user)?
        .ok_or_else(|| anyhow::anyhow!("no profile found; run `openkcal init` first"))?;
    let m = energy::derive_metrics(&profile);

    if human_flag {
        println!("{}", human::format_metrics(&m));
    } else {
        let out = output::success(
            "metrics",
            json!({
                "bmi": m.bmi,
                "bmi_category": body::bmi_category(m.bmi),
                "bmr": m.bmr,
                "tdee": m.tdee,
                "activity_level": profile.activity_level.to_string()
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
