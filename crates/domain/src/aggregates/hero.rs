//! Hero aggregate - A registered hero and the superpowers it is linked to
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: links can only change through reconciliation
//! - **Normalizing factory**: `new()` trims string fields
//! - **No self-validation**: command validators run before any mutation, so
//!   `new()` and `update_details()` accept whatever they are given

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::associations::{reconcile, AssociationDelta};
use crate::error::DomainError;
use crate::{HeroId, HeroSuperPower, SuperPowerId};

/// Maximum length of a hero's name, in characters.
pub const MAX_HERO_NAME_LENGTH: usize = 120;
/// Maximum length of a hero's codename, in characters.
pub const MAX_HERO_CODENAME_LENGTH: usize = 120;
/// Exclusive upper bound for height, in meters.
pub const MAX_HERO_HEIGHT: f64 = 3.0;
/// Exclusive upper bound for weight, in kilograms.
pub const MAX_HERO_WEIGHT: f64 = 500.0;
/// Youngest accepted age, in whole years.
pub const MIN_HERO_AGE_YEARS: u32 = 15;
/// Oldest accepted age, in whole years.
pub const MAX_HERO_AGE_YEARS: u32 = 150;

/// A registered hero.
///
/// # Invariants
///
/// - the link collection never holds two links to the same superpower
/// - every link's `hero_id` equals the hero's id
///
/// # Example
///
/// ```
/// use superhero_domain::{Hero, SuperPowerId};
///
/// let mut hero = Hero::new("  Clark Kent ", "Superman", 1.90, 107.0, None);
/// hero.reconcile_super_powers(&[SuperPowerId::new(2), SuperPowerId::new(2)]);
///
/// assert_eq!(hero.name(), "Clark Kent");
/// assert_eq!(hero.super_power_ids(), vec![SuperPowerId::new(2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    // Identity
    id: HeroId,

    // Core attributes
    name: String,
    codename: String,
    date_birth: Option<NaiveDate>,
    height: f64,
    weight: f64,

    // Owned links
    super_powers: Vec<HeroSuperPower>,
}

impl Hero {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an unsaved hero with no superpowers.
    pub fn new(
        name: impl Into<String>,
        codename: impl Into<String>,
        height: f64,
        weight: f64,
        date_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: HeroId::UNASSIGNED,
            name: name.into().trim().to_string(),
            codename: codename.into().trim().to_string(),
            date_birth,
            height,
            weight,
            super_powers: Vec::new(),
        }
    }

    /// Rebuild a hero read back from the store, links included.
    pub fn restore(
        id: HeroId,
        name: String,
        codename: String,
        date_birth: Option<NaiveDate>,
        height: f64,
        weight: f64,
        super_powers: Vec<HeroSuperPower>,
    ) -> Self {
        Self {
            id,
            name,
            codename,
            date_birth,
            height,
            weight,
            super_powers,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> HeroId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn codename(&self) -> &str {
        &self.codename
    }

    #[inline]
    pub fn date_birth(&self) -> Option<NaiveDate> {
        self.date_birth
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn super_powers(&self) -> &[HeroSuperPower] {
        &self.super_powers
    }

    /// Ids of every linked superpower, in link order.
    pub fn super_power_ids(&self) -> Vec<SuperPowerId> {
        self.super_powers
            .iter()
            .map(HeroSuperPower::super_power_id)
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Record the id handed out by the store and propagate it to the links.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if an id was already assigned.
    pub fn assign_id(&mut self, id: HeroId) -> Result<(), DomainError> {
        if self.id.is_assigned() {
            return Err(DomainError::constraint(format!(
                "Hero already has id {}",
                self.id
            )));
        }
        self.id = id;
        for link in &mut self.super_powers {
            link.reassign_hero(id);
        }
        Ok(())
    }

    /// Replace every scalar field, trimming the strings.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        codename: impl Into<String>,
        height: f64,
        weight: f64,
        date_birth: Option<NaiveDate>,
    ) {
        self.name = name.into().trim().to_string();
        self.codename = codename.into().trim().to_string();
        self.height = height;
        self.weight = weight;
        self.date_birth = date_birth;
    }

    /// Move the link collection to the distinct ids in `target`.
    ///
    /// Links that survive are kept as-is (including a loaded superpower);
    /// only the returned delta is added or dropped.
    pub fn reconcile_super_powers(&mut self, target: &[SuperPowerId]) -> AssociationDelta {
        let delta = reconcile(&self.super_power_ids(), target);

        self.super_powers
            .retain(|link| !delta.removed.contains(&link.super_power_id()));
        let hero_id = self.id;
        self.super_powers.extend(
            delta
                .added
                .iter()
                .map(|super_power_id| HeroSuperPower::new(hero_id, *super_power_id)),
        );

        delta
    }
}
