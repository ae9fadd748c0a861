use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::params;

use crate::models::meal::MealRecord;

use super::Database;

struct MealRow {
    id: String,
    user_id: String,
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    health_score: f64,
    source: String,
    created_at: i64,
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MealRow> {
    Ok(MealRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        calories: row.get(3)?,
        protein: row.get(4)?,
        carbs: row.get(5)?,
        fats: row.get(6)?,
        health_score: row.get(7)?,
        source: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn row_to_meal(r: MealRow) -> Result<MealRecord> {
    let created_at: DateTime<Utc> = Utc
        .timestamp_millis_opt(r.created_at)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid meal timestamp: {}", r.created_at))?;
    Ok(MealRecord {
        id: r.id,
        user_id: r.user_id,
        name: r.name,
        calories: r.calories,
        protein: r.protein,
        carbs: r.carbs,
        fats: r.fats,
        health_score: r.health_score,
        source: r.source,
        created_at,
    })
}

/// UTC epoch-millisecond bounds of a calendar day: [00:00:00.000, next day).
fn day_bounds_ms(date: NaiveDate) -> (i64, i64) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let end = start + Duration::days(1);
    (start.timestamp_millis(), end.timestamp_millis())
}

impl Database {
    pub fn insert_meal(&self, m: &MealRecord) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meals (id, user_id, name, calories, protein, carbs, fats, health_score, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                m.id,
                m.user_id,
                m.name,
                m.calories,
                m.protein,
                m.carbs,
                m.fats,
                m.health_score,
                m.source,
                m.created_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }

    /// Meals with `start <= created_at < end`, ascending.
    pub fn query_meals_by_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<MealRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, calories, protein, carbs, fats, health_score, source, created_at
             FROM meals WHERE user_id = ?1 AND created_at >= ?2 AND created_at < ?3
             ORDER BY created_at",
        )?;
        let rows = stmt.query_map(
            params![user_id, start.timestamp_millis(), end.timestamp_millis()],
            map_row,
        )?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    /// The day bucket of `query_meals_by_range` for one calendar day.
    pub fn meals_for_day(&self, user_id: &str, date: NaiveDate) -> Result<Vec<MealRecord>> {
        let (start_ms, end_ms) = day_bounds_ms(date);
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, calories, protein, carbs, fats, health_score, source, created_at
             FROM meals WHERE user_id = ?1 AND created_at >= ?2 AND created_at < ?3
             ORDER BY created_at",
        )?;
        let rows = stmt.query_map(params![user_id, start_ms, end_ms], map_row)?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    /// Most recent meals, newest first.
    pub fn recent_meals(&self, user_id: &str, limit: u32) -> Result<Vec<MealRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, calories, protein, carbs, fats, health_score, source, created_at
             FROM meals WHERE user_id = ?1 ORDER BY created_at DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![user_id, i64::from(limit)], map_row)?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    /// All meals for a user, optionally bounded by inclusive calendar dates.
    pub fn query_meals(
        &self,
        user_id: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<MealRecord>> {
        let start_ms = from.map_or(i64::MIN, |d| day_bounds_ms(d).0);
        let end_ms = to.map_or(i64::MAX, |d| day_bounds_ms(d).1);
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, calories, protein, carbs, fats, health_score, source, created_at
             FROM meals WHERE user_id = ?1 AND created_at >= ?2 AND created_at < ?3
             ORDER BY created_at",
        )?;
        let rows = stmt.query_map(params![user_id, start_ms, end_ms], map_row)?;

        let mut meals = Vec::new();
        for row in rows {
            meals.push(row_to_meal(row?)?);
        }
        Ok(meals)
    }

    /// Delete the user's entire meal history. Returns the number removed.
    pub fn delete_meals_for_user(&self, user_id: &str) -> Result<usize> {
        let count = self
            .conn
            .execute("DELETE FROM meals WHERE user_id = ?1", params![user_id])?;
        Ok(count)
    }
}
