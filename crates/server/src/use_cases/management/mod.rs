//! Management use cases for the CRUD operations behind the HTTP API.

mod hero;
mod super_power;

pub use hero::HeroCrud;
pub use super_power::SuperPowerCrud;

/// Container for management use cases.
pub struct ManagementUseCases {
    pub hero: HeroCrud,
    pub super_power: SuperPowerCrud,
}

impl ManagementUseCases {
    pub fn new(hero: HeroCrud, super_power: SuperPowerCrud) -> Self {
        Self { hero, super_power }
    }
}
