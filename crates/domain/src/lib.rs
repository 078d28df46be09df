//! Superhero Domain - heroes, superpowers and the links between them.
//!
//! ## Structure
//!
//! - `aggregates/` - `Hero`, which owns its superpower links
//! - `entities/` - `SuperPower` and the `HeroSuperPower` link record
//! - `associations` - add/remove reconciliation of link sets
//! - `common/` - pure date and string helpers

pub mod aggregates;
pub mod associations;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;

pub use aggregates::{
    Hero, MAX_HERO_AGE_YEARS, MAX_HERO_CODENAME_LENGTH, MAX_HERO_HEIGHT, MAX_HERO_NAME_LENGTH,
    MAX_HERO_WEIGHT, MIN_HERO_AGE_YEARS,
};
pub use associations::{distinct_ids, reconcile, AssociationDelta};
pub use entities::{
    HeroSuperPower, SuperPower, MAX_SUPER_POWER_DESCRIPTION_LENGTH, MAX_SUPER_POWER_NAME_LENGTH,
};
pub use error::DomainError;
pub use ids::{HeroId, SuperPowerId};
