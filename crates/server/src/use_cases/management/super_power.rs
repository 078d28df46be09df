//! SuperPower CRUD.

use std::sync::Arc;

use superhero_domain::{SuperPower, SuperPowerId};
use superhero_shared::{SuperPowerDto, SuperPowerRequest};

use crate::infrastructure::ports::SuperPowerRepo;
use crate::use_cases::projection::super_power_dto;
use crate::use_cases::validation::{validate_id, validate_super_power};
use crate::use_cases::UseCaseError;

pub struct SuperPowerCrud {
    super_powers: Arc<dyn SuperPowerRepo>,
}

impl SuperPowerCrud {
    pub fn new(super_powers: Arc<dyn SuperPowerRepo>) -> Self {
        Self { super_powers }
    }

    pub async fn list(&self) -> Result<Vec<SuperPowerDto>, UseCaseError> {
        let super_powers = self.super_powers.list_all().await?;
        Ok(super_powers.iter().map(super_power_dto).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Option<SuperPowerDto>, UseCaseError> {
        let super_power = self.super_powers.get(SuperPowerId::new(id)).await?;
        Ok(super_power.as_ref().map(super_power_dto))
    }

    pub async fn create(&self, request: SuperPowerRequest) -> Result<SuperPowerDto, UseCaseError> {
        validate_super_power(&request)?;

        let mut super_power = SuperPower::new(request.name, request.description);
        let id = self.super_powers.create(&super_power).await?;
        super_power.assign_id(id)?;
        tracing::info!(super_power_id = %id, name = super_power.name(), "SuperPower created");

        Ok(super_power_dto(&super_power))
    }

    /// Overwrite name and description. Nothing is written when both are unchanged.
    pub async fn update(
        &self,
        id: i64,
        request: SuperPowerRequest,
    ) -> Result<SuperPowerDto, UseCaseError> {
        let super_power_id = SuperPowerId::new(id);
        let Some(mut super_power) = self.super_powers.get(super_power_id).await? else {
            return Err(UseCaseError::not_found("SuperPower", super_power_id));
        };

        validate_super_power(&request)?;

        if super_power.update(request.name, request.description) {
            self.super_powers.update(&super_power).await?;
            tracing::info!(super_power_id = %super_power_id, "SuperPower updated");
        } else {
            tracing::debug!(super_power_id = %super_power_id, "SuperPower unchanged, skipping write");
        }

        Ok(super_power_dto(&super_power))
    }

    /// Delete a superpower, unlinking it from every hero.
    pub async fn delete(&self, id: i64) -> Result<SuperPowerDto, UseCaseError> {
        validate_id(id)?;

        let super_power_id = SuperPowerId::new(id);
        let Some(super_power) = self.super_powers.get(super_power_id).await? else {
            return Err(UseCaseError::not_found("SuperPower", super_power_id));
        };

        self.super_powers.delete(super_power_id).await?;
        tracing::info!(super_power_id = %super_power_id, "SuperPower deleted");

        Ok(super_power_dto(&super_power))
    }
}
