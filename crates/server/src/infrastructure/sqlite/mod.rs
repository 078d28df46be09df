//! SQLite persistence adapter.
//!
//! One pool per process. An in-memory database lives only as long as its
//! connection, so for `:memory:` URLs the pool is pinned to a single
//! connection that is never recycled.

mod hero_repo;
mod schema;
mod super_power_repo;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::ports::{HeroRepo, RepoError, SuperPowerRepo};

pub use hero_repo::SqliteHeroRepo;
pub use schema::{ensure_schema, seed_super_powers, DEFAULT_SUPER_POWERS};
pub use super_power_repo::SqliteSuperPowerRepo;

/// Open a pool for `database_url` with foreign keys enforced.
pub async fn connect(database_url: &str) -> Result<SqlitePool, RepoError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| RepoError::database("connect", e))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| RepoError::database("connect", e))?;

    tracing::info!(database_url, "Connected to SQLite");
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Both repositories over one shared pool.
#[derive(Clone)]
pub struct SqliteRepositories {
    pub hero: Arc<dyn HeroRepo>,
    pub super_power: Arc<dyn SuperPowerRepo>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            hero: Arc::new(SqliteHeroRepo::new(pool.clone())),
            super_power: Arc::new(SqliteSuperPowerRepo::new(pool)),
        }
    }
}

/// A fresh in-memory database with the schema applied and nothing seeded.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:").await.unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}
