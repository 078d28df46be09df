//! Domain entities - Core business objects with identity

mod hero_super_power;
mod super_power;

pub use hero_super_power::HeroSuperPower;
pub use super_power::{
    SuperPower, MAX_SUPER_POWER_DESCRIPTION_LENGTH, MAX_SUPER_POWER_NAME_LENGTH,
};
