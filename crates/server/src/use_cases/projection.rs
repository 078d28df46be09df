//! Entity to DTO projection.

use superhero_domain::{Hero, SuperPower};
use superhero_shared::{HeroDto, SuperPowerDto};

pub fn super_power_dto(super_power: &SuperPower) -> SuperPowerDto {
    SuperPowerDto {
        id: super_power.id().get(),
        name: super_power.name().to_string(),
        description: super_power.description().map(str::to_string),
    }
}

/// Project a hero; links whose superpower was not loaded are left out.
pub fn hero_dto(hero: &Hero) -> HeroDto {
    HeroDto {
        id: hero.id().get(),
        name: hero.name().to_string(),
        codename: hero.codename().to_string(),
        height: hero.height(),
        weight: hero.weight(),
        date_birth: hero.date_birth(),
        super_powers: hero
            .super_powers()
            .iter()
            .filter_map(|link| link.super_power())
            .map(super_power_dto)
            .collect(),
    }
}
