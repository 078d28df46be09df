//! SQLite-backed superpower storage.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use superhero_domain::{SuperPower, SuperPowerId};

use crate::infrastructure::ports::{RepoError, SuperPowerRepo};

/// SQLite caps bound variables per statement, so long id lists are split.
const MAX_BINDS_PER_QUERY: usize = 500;

pub struct SqliteSuperPowerRepo {
    pool: SqlitePool,
}

impl SqliteSuperPowerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decode(row: &SqliteRow) -> Result<SuperPower, sqlx::Error> {
    Ok(SuperPower::restore(
        SuperPowerId::new(row.try_get("id")?),
        row.try_get("name")?,
        row.try_get("description")?,
    ))
}

#[async_trait]
impl SuperPowerRepo for SqliteSuperPowerRepo {
    async fn get(&self, id: SuperPowerId) -> Result<Option<SuperPower>, RepoError> {
        sqlx::query("SELECT id, name, description FROM super_powers WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("super_power.get", e))?
            .as_ref()
            .map(decode)
            .transpose()
            .map_err(|e| RepoError::database("super_power.get", e))
    }

    async fn list_all(&self) -> Result<Vec<SuperPower>, RepoError> {
        sqlx::query("SELECT id, name, description FROM super_powers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("super_power.list_all", e))?
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("super_power.list_all", e))
    }

    async fn create(&self, super_power: &SuperPower) -> Result<SuperPowerId, RepoError> {
        let id = sqlx::query("INSERT INTO super_powers (name, description) VALUES (?, ?)")
            .bind(super_power.name())
            .bind(super_power.description())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("super_power.create", e))?
            .last_insert_rowid();

        Ok(SuperPowerId::new(id))
    }

    async fn update(&self, super_power: &SuperPower) -> Result<(), RepoError> {
        let updated = sqlx::query("UPDATE super_powers SET name = ?, description = ? WHERE id = ?")
            .bind(super_power.name())
            .bind(super_power.description())
            .bind(super_power.id().get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("super_power.update", e))?
            .rows_affected();

        if updated == 0 {
            return Err(RepoError::not_found("SuperPower", super_power.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: SuperPowerId) -> Result<(), RepoError> {
        let deleted = sqlx::query("DELETE FROM super_powers WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("super_power.delete", e))?
            .rows_affected();

        if deleted == 0 {
            return Err(RepoError::not_found("SuperPower", id));
        }
        Ok(())
    }

    async fn find_existing(&self, ids: &[SuperPowerId]) -> Result<Vec<SuperPowerId>, RepoError> {
        let mut found = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_BINDS_PER_QUERY) {
            let mut query =
                QueryBuilder::<Sqlite>::new("SELECT id FROM super_powers WHERE id IN (");
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(id.get());
            }
            separated.push_unseparated(")");

            let rows = query
                .build()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::database("super_power.find_existing", e))?;
            for row in &rows {
                let id = row
                    .try_get("id")
                    .map_err(|e| RepoError::database("super_power.find_existing", e))?;
                found.push(SuperPowerId::new(id));
            }
        }

        Ok(found)
    }
}
