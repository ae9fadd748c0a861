use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged meal. Immutable once created; re-importing a user's
/// history deletes and reinserts, never merges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// 0-10, informational only.
    pub health_score: f64,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl MealRecord {
    pub fn new(user_id: String, name: String, calories: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            calories,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            health_score: 0.0,
            source: "manual".to_string(),
            created_at: Utc::now(),
        }
    }
}
