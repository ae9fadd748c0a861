use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};

use crate::db::Database;
use crate::models::config::Config;
use crate::models::meal::MealRecord;

pub struct LogMeal<'a> {
    pub name: &'a str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub health_score: f64,
    pub source: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

/// Log a single meal for the active user. Returns the created record.
pub fn log_meal(db: &Database, config: &Config, entry: LogMeal) -> Result<MealRecord> {
    if entry.name.trim().is_empty() {
        anyhow::bail!("meal name must not be empty");
    }
    for (label, v) in [
        ("calories", entry.calories),
        ("protein", entry.protein),
        ("carbs", entry.carbs),
        ("fats", entry.fats),
    ] {
        if !(v >= 0.0) || !v.is_finite() {
            anyhow::bail!("{} must be a non-negative number", label);
        }
    }

    let mut m = MealRecord::new(config.user.clone(), entry.name.trim().to_string(), entry.calories);
    m.protein = entry.protein;
    m.carbs = entry.carbs;
    m.fats = entry.fats;
    m.health_score = entry.health_score.clamp(0.0, 10.0);
    if let Some(s) = entry.source {
        m.source = s.to_string();
    }
    if let Some(d) = entry.date {
        if let Some(dt) = d.and_hms_opt(12, 0, 0) {
            m.created_at = Utc.from_utc_datetime(&dt);
        }
    }
    db.insert_meal(&m)?;
    Ok(m)
}

/// Batch-log meals from a JSON array string. Returns created records.
pub fn log_batch(db: &Database, config: &Config, batch_json: &str) -> Result<Vec<MealRecord>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(batch_json)?;
    let mut results = Vec::new();

    for entry in &entries {
        let name = entry["name"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing 'name' in batch entry"))?;
        let calories = entry["calories"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("missing 'calories' in batch entry"))?;
        let meal = log_meal(
            db,
            config,
            LogMeal {
                name,
                calories,
                protein: entry["protein"].as_f64().unwrap_or(0.0),
                carbs: entry["carbs"].as_f64().unwrap_or(0.0),
                fats: entry["fats"].as_f64().unwrap_or(0.0),
                health_score: entry["health_score"].as_f64().unwrap_or(0.0),
                source: entry["source"].as_str(),
                date: None,
            },
        )?;
        results.push(meal);
    }

    Ok(results)
}
