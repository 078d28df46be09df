//! Port traits for infrastructure boundaries.

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{HeroRepo, SuperPowerRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::{MockHeroRepo, MockSuperPowerRepo};
