//! Hero CRUD.

use std::sync::Arc;

use superhero_domain::{Hero, HeroId, SuperPowerId};
use superhero_shared::{HeroDto, HeroRequest};

use crate::infrastructure::ports::{ClockPort, HeroRepo, SuperPowerRepo};
use crate::use_cases::projection::hero_dto;
use crate::use_cases::validation::{validate_id, HeroValidator};
use crate::use_cases::UseCaseError;

pub struct HeroCrud {
    heroes: Arc<dyn HeroRepo>,
    validator: HeroValidator,
}

impl HeroCrud {
    pub fn new(
        heroes: Arc<dyn HeroRepo>,
        super_powers: Arc<dyn SuperPowerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let validator = HeroValidator::new(heroes.clone(), super_powers, clock);
        Self { heroes, validator }
    }

    pub async fn list(&self) -> Result<Vec<HeroDto>, UseCaseError> {
        let heroes = self.heroes.list_all().await?;
        Ok(heroes.iter().map(hero_dto).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Option<HeroDto>, UseCaseError> {
        let hero = self.heroes.get(HeroId::new(id)).await?;
        Ok(hero.as_ref().map(hero_dto))
    }

    pub async fn create(&self, request: HeroRequest) -> Result<HeroDto, UseCaseError> {
        self.validator.validate(&request, None).await?;

        let target = requested_ids(&request);
        let mut hero = Hero::new(
            request.name,
            request.codename,
            request.height,
            request.weight,
            request.date_birth,
        );
        hero.reconcile_super_powers(&target);

        let id = self.heroes.create(&hero).await?;
        hero.assign_id(id)?;
        tracing::info!(hero_id = %id, codename = hero.codename(), "Hero created");

        self.reload(hero.id()).await
    }

    /// Replace every field of an existing hero and move its links to the
    /// requested superpowers.
    pub async fn update(&self, id: i64, request: HeroRequest) -> Result<HeroDto, UseCaseError> {
        let hero_id = HeroId::new(id);
        let Some(mut hero) = self.heroes.get(hero_id).await? else {
            return Err(UseCaseError::not_found("Hero", hero_id));
        };

        self.validator.validate(&request, Some(hero_id)).await?;

        let target = requested_ids(&request);
        hero.update_details(
            request.name,
            request.codename,
            request.height,
            request.weight,
            request.date_birth,
        );
        let delta = hero.reconcile_super_powers(&target);

        self.heroes.update(&hero, &delta).await?;
        tracing::info!(
            hero_id = %hero_id,
            added = delta.added.len(),
            removed = delta.removed.len(),
            "Hero updated"
        );

        self.reload(hero_id).await
    }

    /// Delete a hero and return what it looked like.
    pub async fn delete(&self, id: i64) -> Result<HeroDto, UseCaseError> {
        validate_id(id)?;

        let hero_id = HeroId::new(id);
        let Some(hero) = self.heroes.get(hero_id).await? else {
            return Err(UseCaseError::not_found("Hero", hero_id));
        };

        self.heroes.delete(hero_id).await?;
        tracing::info!(hero_id = %hero_id, "Hero deleted");

        Ok(hero_dto(&hero))
    }

    async fn reload(&self, id: HeroId) -> Result<HeroDto, UseCaseError> {
        self.heroes
            .get(id)
            .await?
            .as_ref()
            .map(hero_dto)
            .ok_or_else(|| UseCaseError::not_found("Hero", id))
    }
}

fn requested_ids(request: &HeroRequest) -> Vec<SuperPowerId> {
    request
        .superpower_ids
        .iter()
        .flatten()
        .copied()
        .map(SuperPowerId::new)
        .collect()
}
