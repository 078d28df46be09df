//! Table definitions and startup seeding.

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS heroes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        codename TEXT NOT NULL,
        date_birth TEXT,
        height REAL NOT NULL,
        weight REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS super_powers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS hero_super_powers (
        hero_id INTEGER NOT NULL REFERENCES heroes(id) ON DELETE CASCADE,
        super_power_id INTEGER NOT NULL REFERENCES super_powers(id) ON DELETE CASCADE,
        PRIMARY KEY (hero_id, super_power_id)
    )
    "#,
];

/// Superpowers inserted into an empty store at startup.
pub const DEFAULT_SUPER_POWERS: [(&str, &str); 5] = [
    ("Super Strength", "Ability to lift extremely heavy objects"),
    ("Flight", "Ability to fly through the air"),
    ("Invulnerability", "Resistance to physical damage"),
    ("Super Speed", "Ability to move at incredible speeds"),
    ("Telepathy", "Ability to read and influence minds"),
];

/// Create the tables if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("schema", e))?;
    }
    Ok(())
}

/// Insert [`DEFAULT_SUPER_POWERS`] when the table is empty.
///
/// Returns how many rows were inserted.
pub async fn seed_super_powers(pool: &SqlitePool) -> Result<usize, RepoError> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM super_powers")
        .fetch_one(pool)
        .await
        .map_err(|e| RepoError::database("seed", e))?;

    if existing > 0 {
        tracing::debug!(existing, "Superpowers already present, skipping seed");
        return Ok(0);
    }

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| RepoError::database("seed", e))?;
    for (name, description) in DEFAULT_SUPER_POWERS {
        sqlx::query("INSERT INTO super_powers (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("seed", e))?;
    }
    tx.commit()
        .await
        .map_err(|e| RepoError::database("seed", e))?;

    tracing::info!(count = DEFAULT_SUPER_POWERS.len(), "Seeded superpowers");
    Ok(DEFAULT_SUPER_POWERS.len())
}
