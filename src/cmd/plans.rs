use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use openkcal::core::{energy, plan};
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;
use openkcal::output::human;

pub fn run(select: Option<&str>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let mut profile = db
        .get_profile(&config.user)?
        .ok_or_else(|| anyhow::anyhow!("no profile found; run `openkcal init` first"))?;

    let plans = plan::generate_plans(&profile);
    if plans.is_empty() {
        anyhow::bail!("profile is incomplete (height/weight missing); run `openkcal profile set`");
    }

    if let Some(label) = select {
        let plan_type: plan::PlanType = label.parse()?;
        let chosen = plans
            .iter()
            .find(|p| p.plan_type == plan_type)
            .ok_or_else(|| {
                anyhow::anyhow!("plan {} was filtered by the safety floor", plan_type)
            })?;
        profile.caloric_intake = f64::from(chosen.calories_per_day);
        profile.updated_at = Utc::now();
        db.upsert_profile(&profile)?;
    }

    let m = energy::derive_metrics(&profile);
    let floor = plan::min_safe_calories(m.bmr);

    if human_flag {
        println!("{}", human::plans_table(&plans, profile.caloric_intake));
        println!("Safety floor: {} kcal/day", floor);
        if profile.caloric_intake > 0.0 {
            println!("Daily target: {} kcal", profile.caloric_intake);
        }
    } else {
        let out = output::success(
            "plans",
            json!({
                "plans": plans,
                "min_safe_calories": floor,
                "caloric_intake": profile.caloric_intake
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
