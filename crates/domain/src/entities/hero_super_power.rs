//! HeroSuperPower - the many-to-many link between a hero and a superpower

use serde::{Deserialize, Serialize};

use crate::{HeroId, SuperPower, SuperPowerId};

/// A single hero → superpower link, keyed by `(hero_id, super_power_id)`.
///
/// The referenced [`SuperPower`] is only present when the link was loaded
/// from the store together with its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSuperPower {
    hero_id: HeroId,
    super_power_id: SuperPowerId,
    super_power: Option<SuperPower>,
}

impl HeroSuperPower {
    pub fn new(hero_id: HeroId, super_power_id: SuperPowerId) -> Self {
        Self {
            hero_id,
            super_power_id,
            super_power: None,
        }
    }

    /// Attach the loaded superpower this link points at.
    pub fn with_super_power(mut self, super_power: SuperPower) -> Self {
        self.super_power = Some(super_power);
        self
    }

    #[inline]
    pub fn hero_id(&self) -> HeroId {
        self.hero_id
    }

    #[inline]
    pub fn super_power_id(&self) -> SuperPowerId {
        self.super_power_id
    }

    #[inline]
    pub fn super_power(&self) -> Option<&SuperPower> {
        self.super_power.as_ref()
    }

    pub(crate) fn reassign_hero(&mut self, hero_id: HeroId) {
        self.hero_id = hero_id;
    }
}
