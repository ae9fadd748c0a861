use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::db::Database;
use crate::models::meal::MealRecord;

/// Export meal history to CSV format.
pub fn to_csv(
    db: &Database,
    user_id: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<String> {
    let meals = db.query_meals(user_id, from, to)?;
    let mut out =
        String::from("created_at,name,calories,protein,carbs,fats,health_score,source\n");
    for m in &meals {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            m.created_at.to_rfc3339(),
            m.name,
            m.calories,
            m.protein,
            m.carbs,
            m.fats,
            m.health_score,
            m.source,
        ));
    }
    Ok(out)
}

/// Export meal history to JSON format (array of meal objects).
pub fn to_json(
    db: &Database,
    user_id: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<String> {
    let meals = db.query_meals(user_id, from, to)?;
    Ok(serde_json::to_string_pretty(&meals)?)
}

#[derive(Deserialize)]
struct ImportEntry {
    name: String,
    calories: f64,
    #[serde(default)]
    protein: f64,
    #[serde(default)]
    carbs: f64,
    #[serde(default)]
    fats: f64,
    #[serde(default)]
    health_score: f64,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

/// Re-import a user's meal history from a JSON array string.
///
/// Deletes every existing meal for the user first, then inserts the
/// imported set: re-import replaces history wholesale, never a partial
/// merge. Returns (deleted, inserted) counts.
pub fn import_json(db: &Database, user_id: &str, json_str: &str) -> Result<(usize, usize)> {
    let entries: Vec<ImportEntry> = serde_json::from_str(json_str)?;

    let deleted = db.delete_meals_for_user(user_id)?;

    let mut inserted = 0;
    for e in entries {
        let mut m = MealRecord::new(user_id.to_string(), e.name, e.calories);
        m.protein = e.protein;
        m.carbs = e.carbs;
        m.fats = e.fats;
        m.health_score = e.health_score.clamp(0.0, 10.0);
        m.source = e.source.unwrap_or_else(|| "import".to_string());
        if let Some(ts) = &e.created_at {
            m.created_at = ts.parse::<DateTime<Utc>>()?;
        }
        db.insert_meal(&m)?;
        inserted += 1;
    }

    Ok((deleted, inserted))
}
