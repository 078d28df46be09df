//! Repository port traits for database access.

use async_trait::async_trait;
use superhero_domain::{AssociationDelta, Hero, HeroId, SuperPower, SuperPowerId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroRepo: Send + Sync {
    // CRUD
    /// Load a hero with its links; each link carries its superpower.
    async fn get(&self, id: HeroId) -> Result<Option<Hero>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Hero>, RepoError>;
    /// Insert the hero row and all of its links in one transaction.
    async fn create(&self, hero: &Hero) -> Result<HeroId, RepoError>;
    /// Overwrite the hero row and apply `links` in one transaction.
    async fn update(&self, hero: &Hero, links: &AssociationDelta) -> Result<(), RepoError>;
    /// Remove the hero; its links go with it.
    async fn delete(&self, id: HeroId) -> Result<(), RepoError>;

    // Queries
    /// Case-sensitive exact codename match, optionally ignoring one hero.
    async fn codename_exists(
        &self,
        codename: &str,
        excluding: Option<HeroId>,
    ) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuperPowerRepo: Send + Sync {
    // CRUD
    async fn get(&self, id: SuperPowerId) -> Result<Option<SuperPower>, RepoError>;
    async fn list_all(&self) -> Result<Vec<SuperPower>, RepoError>;
    async fn create(&self, super_power: &SuperPower) -> Result<SuperPowerId, RepoError>;
    async fn update(&self, super_power: &SuperPower) -> Result<(), RepoError>;
    /// Remove the superpower and every hero link pointing at it.
    async fn delete(&self, id: SuperPowerId) -> Result<(), RepoError>;

    // Queries
    /// The subset of `ids` that exist in the store.
    async fn find_existing(&self, ids: &[SuperPowerId]) -> Result<Vec<SuperPowerId>, RepoError>;
}
