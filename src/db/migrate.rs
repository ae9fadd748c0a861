use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profiles (
            user_id        TEXT PRIMARY KEY,
            age            INTEGER NOT NULL DEFAULT 0,
            sex            TEXT NOT NULL DEFAULT 'male',
            height         TEXT NOT NULL DEFAULT '0',
            weight         REAL NOT NULL DEFAULT 0,
            unit           TEXT NOT NULL DEFAULT 'metric',
            activity_level TEXT NOT NULL DEFAULT 'sedentary',
            caloric_intake REAL NOT NULL DEFAULT 0,
            updated_at     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS meals (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            name         TEXT NOT NULL,
            calories     REAL NOT NULL,
            protein      REAL NOT NULL DEFAULT 0,
            carbs        REAL NOT NULL DEFAULT 0,
            fats         REAL NOT NULL DEFAULT 0,
            health_score REAL NOT NULL DEFAULT 0,
            source       TEXT NOT NULL DEFAULT 'manual',
            created_at   INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_meals_user_ts ON meals(user_id, created_at);",
    )?;
    Ok(())
}
