//! SQLite-backed hero storage.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use superhero_domain::{
    AssociationDelta, Hero, HeroId, HeroSuperPower, SuperPower, SuperPowerId,
};

use crate::infrastructure::ports::{HeroRepo, RepoError};

const SELECT_HERO: &str =
    "SELECT id, name, codename, date_birth, height, weight FROM heroes";

const SELECT_LINKS: &str = "SELECT l.hero_id, s.id, s.name, s.description \
     FROM hero_super_powers l \
     JOIN super_powers s ON s.id = l.super_power_id";

pub struct SqliteHeroRepo {
    pool: SqlitePool,
}

impl SqliteHeroRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_links(
        conn: &mut SqliteConnection,
        hero_id: HeroId,
        super_power_ids: &[SuperPowerId],
        operation: &'static str,
    ) -> Result<(), RepoError> {
        for super_power_id in super_power_ids {
            sqlx::query("INSERT INTO hero_super_powers (hero_id, super_power_id) VALUES (?, ?)")
                .bind(hero_id.get())
                .bind(super_power_id.get())
                .execute(&mut *conn)
                .await
                .map_err(|e| RepoError::database(operation, e))?;
        }
        Ok(())
    }
}

fn decode_link(row: &SqliteRow) -> Result<(HeroId, HeroSuperPower), sqlx::Error> {
    let hero_id = HeroId::new(row.try_get("hero_id")?);
    let super_power = SuperPower::restore(
        SuperPowerId::new(row.try_get("id")?),
        row.try_get("name")?,
        row.try_get("description")?,
    );
    let link = HeroSuperPower::new(hero_id, super_power.id()).with_super_power(super_power);
    Ok((hero_id, link))
}

fn decode_hero(row: &SqliteRow, links: Vec<HeroSuperPower>) -> Result<Hero, sqlx::Error> {
    Ok(Hero::restore(
        HeroId::new(row.try_get("id")?),
        row.try_get("name")?,
        row.try_get("codename")?,
        row.try_get("date_birth")?,
        row.try_get("height")?,
        row.try_get("weight")?,
        links,
    ))
}

#[async_trait]
impl HeroRepo for SqliteHeroRepo {
    async fn get(&self, id: HeroId) -> Result<Option<Hero>, RepoError> {
        let row = sqlx::query(&format!("{SELECT_HERO} WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("hero.get", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        // rowid order is link insertion order
        let links = sqlx::query(&format!("{SELECT_LINKS} WHERE l.hero_id = ? ORDER BY l.rowid"))
            .bind(id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("hero.get", e))?
            .iter()
            .map(|row| decode_link(row).map(|(_, link)| link))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("hero.get", e))?;

        decode_hero(&row, links)
            .map(Some)
            .map_err(|e| RepoError::database("hero.get", e))
    }

    async fn list_all(&self) -> Result<Vec<Hero>, RepoError> {
        let rows = sqlx::query(&format!("{SELECT_HERO} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("hero.list_all", e))?;

        let mut links_by_hero: HashMap<HeroId, Vec<HeroSuperPower>> = HashMap::new();
        let link_rows = sqlx::query(&format!("{SELECT_LINKS} ORDER BY l.rowid"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("hero.list_all", e))?;
        for row in &link_rows {
            let (hero_id, link) =
                decode_link(row).map_err(|e| RepoError::database("hero.list_all", e))?;
            links_by_hero.entry(hero_id).or_default().push(link);
        }

        rows.iter()
            .map(|row| {
                let id = HeroId::new(row.try_get("id")?);
                decode_hero(row, links_by_hero.remove(&id).unwrap_or_default())
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RepoError::database("hero.list_all", e))
    }

    async fn create(&self, hero: &Hero) -> Result<HeroId, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("hero.create", e))?;

        let id = sqlx::query(
            "INSERT INTO heroes (name, codename, date_birth, height, weight) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(hero.name())
        .bind(hero.codename())
        .bind(hero.date_birth())
        .bind(hero.height())
        .bind(hero.weight())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("hero.create", e))?
        .last_insert_rowid();
        let id = HeroId::new(id);

        Self::insert_links(&mut tx, id, &hero.super_power_ids(), "hero.create").await?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("hero.create", e))?;

        tracing::debug!(hero_id = %id, links = hero.super_powers().len(), "Hero inserted");
        Ok(id)
    }

    async fn update(&self, hero: &Hero, links: &AssociationDelta) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("hero.update", e))?;

        let updated = sqlx::query(
            "UPDATE heroes SET name = ?, codename = ?, date_birth = ?, height = ?, weight = ? \
             WHERE id = ?",
        )
        .bind(hero.name())
        .bind(hero.codename())
        .bind(hero.date_birth())
        .bind(hero.height())
        .bind(hero.weight())
        .bind(hero.id().get())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoError::database("hero.update", e))?
        .rows_affected();

        if updated == 0 {
            return Err(RepoError::not_found("Hero", hero.id()));
        }

        for super_power_id in &links.removed {
            sqlx::query("DELETE FROM hero_super_powers WHERE hero_id = ? AND super_power_id = ?")
                .bind(hero.id().get())
                .bind(super_power_id.get())
                .execute(&mut *tx)
                .await
                .map_err(|e| RepoError::database("hero.update", e))?;
        }
        Self::insert_links(&mut tx, hero.id(), &links.added, "hero.update").await?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("hero.update", e))?;

        tracing::debug!(
            hero_id = %hero.id(),
            added = links.added.len(),
            removed = links.removed.len(),
            "Hero updated"
        );
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<(), RepoError> {
        let deleted = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("hero.delete", e))?
            .rows_affected();

        if deleted == 0 {
            return Err(RepoError::not_found("Hero", id));
        }
        Ok(())
    }

    async fn codename_exists(
        &self,
        codename: &str,
        excluding: Option<HeroId>,
    ) -> Result<bool, RepoError> {
        let excluded = excluding.map(HeroId::get);
        let (exists,): (i64,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM heroes WHERE codename = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(codename)
        .bind(excluded)
        .bind(excluded)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("hero.codename_exists", e))?;

        Ok(exists != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::{test_pool, SqliteSuperPowerRepo};
    use crate::infrastructure::ports::SuperPowerRepo;
    use chrono::NaiveDate;

    async fn seeded() -> (SqliteHeroRepo, Vec<SuperPowerId>) {
        let pool = test_pool().await;
        let powers = SqliteSuperPowerRepo::new(pool.clone());
        let mut ids = Vec::new();
        for name in ["Flight", "Super Strength", "Telepathy"] {
            ids.push(powers.create(&SuperPower::new(name, None)).await.unwrap());
        }
        (SqliteHeroRepo::new(pool), ids)
    }

    fn superman(powers: &[SuperPowerId]) -> Hero {
        let mut hero = Hero::new(
            "Clark Kent",
            "Superman",
            1.90,
            107.0,
            NaiveDate::from_ymd_opt(1978, 6, 18),
        );
        hero.reconcile_super_powers(powers);
        hero
    }

    #[tokio::test]
    async fn create_then_get_loads_links_with_powers() {
        let (repo, powers) = seeded().await;
        let id = repo.create(&superman(&powers[..2])).await.unwrap();

        let hero = repo.get(id).await.unwrap().unwrap();

        assert_eq!(hero.codename(), "Superman");
        assert_eq!(hero.date_birth(), NaiveDate::from_ymd_opt(1978, 6, 18));
        assert_eq!(hero.super_power_ids(), powers[..2].to_vec());
        assert_eq!(
            hero.super_powers()[0].super_power().map(SuperPower::name),
            Some("Flight")
        );
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let (repo, _) = seeded().await;
        assert!(repo.get(HeroId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_applies_only_the_delta() {
        let (repo, powers) = seeded().await;
        let id = repo.create(&superman(&powers[..2])).await.unwrap();
        let mut hero = repo.get(id).await.unwrap().unwrap();

        hero.update_details("Kal-El", "Superman", 1.91, 108.0, None);
        let delta = hero.reconcile_super_powers(&powers[1..]);
        repo.update(&hero, &delta).await.unwrap();

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Kal-El");
        assert_eq!(stored.date_birth(), None);
        assert_eq!(stored.super_power_ids(), powers[1..].to_vec());
    }

    #[tokio::test]
    async fn failed_link_insert_rolls_back_the_hero() {
        let (repo, powers) = seeded().await;
        let missing = SuperPowerId::new(99);

        let result = repo.create(&superman(&[powers[0], missing])).await;

        assert!(result.is_err());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_links() {
        let (repo, powers) = seeded().await;
        let id = repo.create(&superman(&powers)).await.unwrap();

        repo.delete(id).await.unwrap();

        let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hero_super_powers")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(links, 0);
        assert!(repo.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn codename_check_is_exact_and_can_exclude_self() {
        let (repo, powers) = seeded().await;
        let id = repo.create(&superman(&powers[..1])).await.unwrap();

        assert!(repo.codename_exists("Superman", None).await.unwrap());
        assert!(!repo.codename_exists("superman", None).await.unwrap());
        assert!(!repo.codename_exists("Superman", Some(id)).await.unwrap());
    }

    #[tokio::test]
    async fn list_all_groups_links_per_hero() {
        let (repo, powers) = seeded().await;
        repo.create(&superman(&powers[..1])).await.unwrap();
        let mut batman = Hero::new("Bruce Wayne", "Batman", 1.88, 95.0, None);
        batman.reconcile_super_powers(&powers[2..]);
        repo.create(&batman).await.unwrap();

        let heroes = repo.list_all().await.unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].super_power_ids(), vec![powers[0]]);
        assert_eq!(heroes[1].super_power_ids(), vec![powers[2]]);
    }
}
