use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use std::str::FromStr;

use openkcal::core::{energy, units};
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::models::profile::{ActivityLevel, Height, Sex, UnitSystem, UserProfile};
use openkcal::output;
use openkcal::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let profile = db
        .get_profile(&config.user)?
        .ok_or_else(|| anyhow::anyhow!("no profile found; run `openkcal init` first"))?;
    let m = energy::derive_metrics(&profile);

    if human_flag {
        println!(
            "{} | age {} | {} | {} | height {} | weight {} | {}",
            profile.user_id,
            profile.age,
            profile.sex,
            profile.unit,
            profile.height_raw,
            profile.weight_raw,
            profile.activity_level
        );
        println!("{}", human::format_metrics(&m));
    } else {
        let out = output::success(
            "profile",
            json!({ "profile": profile, "metrics": m }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let mut profile = db
        .get_profile(&config.user)?
        .unwrap_or_else(|| UserProfile::new(config.user.clone()));

    match key {
        "age" => profile.age = value.parse()?,
        "sex" => profile.sex = value.parse::<Sex>()?,
        "height" => {
            let h = Height::parse(value, profile.unit)?;
            profile.height_raw = h.to_raw();
        }
        "weight" => {
            let w: f64 = value.parse()?;
            if w <= 0.0 {
                anyhow::bail!("weight must be positive");
            }
            profile.weight_raw = w;
        }
        "unit" => {
            let new_unit = value.parse::<UnitSystem>()?;
            if new_unit != profile.unit {
                convert_stored_units(&mut profile, new_unit);
            }
        }
        "activity" | "activity_level" => {
            profile.activity_level = ActivityLevel::from_str(value).unwrap_or_default();
        }
        "caloric_intake" => {
            let v: f64 = value.parse()?;
            if v < 0.0 {
                anyhow::bail!("caloric_intake must be non-negative");
            }
            profile.caloric_intake = v;
        }
        _ => anyhow::bail!("unknown profile key: {}", key),
    }

    profile.updated_at = Utc::now();
    db.upsert_profile(&profile)?;

    // Derived values are never stored; recompute right after the mutation so
    // the caller sees fresh numbers.
    let m = energy::derive_metrics(&profile);

    if human_flag {
        println!("Set {} = {}", key, value);
        println!("{}", human::format_metrics(&m));
    } else {
        let out = output::success(
            "profile",
            json!({ "key": key, "value": value, "metrics": m }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

/// Switch the profile's unit system, converting the stored raw values.
/// Converted numbers are rounded to 2 decimal places before persisting.
fn convert_stored_units(profile: &mut UserProfile, new_unit: UnitSystem) {
    match new_unit {
        UnitSystem::Imperial => {
            profile.weight_raw = units::round2(units::kg_to_lb(profile.weight_raw));
            let cm = units::parse_metric_height(&profile.height_raw);
            let total_in = units::cm_to_in(cm);
            let mut feet = (total_in / 12.0).floor();
            let mut inches = (total_in - feet * 12.0).round();
            if inches >= 12.0 {
                feet += 1.0;
                inches = 0.0;
            }
            profile.height_raw = format!("{}'{}", feet as u32, inches as u32);
        }
        UnitSystem::Metric => {
            profile.weight_raw = units::round2(units::lb_to_kg(profile.weight_raw));
            let (feet, inches) = units::parse_feet_inches(&profile.height_raw);
            let cm = units::round2(units::in_to_cm(feet * 12.0 + inches));
            profile.height_raw = format!("{}", cm);
        }
    }
    profile.unit = new_unit;
}
