use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::models::profile::UserProfile;

use super::Database;

struct ProfileRow {
    user_id: String,
    age: u32,
    sex: String,
    height: String,
    weight: f64,
    unit: String,
    activity_level: String,
    caloric_intake: f64,
    updated_at: String,
}

fn row_to_profile(r: ProfileRow) -> Result<UserProfile> {
    let updated_at: DateTime<Utc> =
        DateTime::parse_from_rfc3339(&r.updated_at)?.with_timezone(&Utc);
    Ok(UserProfile {
        user_id: r.user_id,
        age: r.age,
        sex: r.sex.parse()?,
        height_raw: r.height,
        weight_raw: r.weight,
        unit: r.unit.parse()?,
        activity_level: r.activity_level.parse().unwrap_or_default(),
        caloric_intake: r.caloric_intake,
        updated_at,
    })
}

impl Database {
    pub fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, age, sex, height, weight, unit, activity_level, caloric_intake, updated_at
             FROM profiles WHERE user_id = ?1",
        )?;
        let mut rows = stmt.query_map(params![user_id], |row| {
            Ok(ProfileRow {
                user_id: row.get(0)?,
                age: row.get(1)?,
                sex: row.get(2)?,
                height: row.get(3)?,
                weight: row.get(4)?,
                unit: row.get(5)?,
                activity_level: row.get(6)?,
                caloric_intake: row.get(7)?,
                updated_at: row.get(8)?,
            })
        })?;
        match rows.next() {
            Some(row) => Ok(Some(row_to_profile(row?)?)),
            None => Ok(None),
        }
    }

    /// Insert or fully replace the user's profile row. Partial updates are
    /// read-modify-write at the caller, which then re-derives metrics.
    pub fn upsert_profile(&self, p: &UserProfile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (user_id, age, sex, height, weight, unit, activity_level, caloric_intake, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(user_id) DO UPDATE SET
                 age = excluded.age,
                 sex = excluded.sex,
                 height = excluded.height,
                 weight = excluded.weight,
                 unit = excluded.unit,
                 activity_level = excluded.activity_level,
                 caloric_intake = excluded.caloric_intake,
                 updated_at = excluded.updated_at",
            params![
                p.user_id,
                p.age,
                p.sex.to_string(),
                p.height_raw,
                p.weight_raw,
                p.unit.to_string(),
                p.activity_level.to_string(),
                p.caloric_intake,
                p.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }
}
