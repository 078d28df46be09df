//! Aggregates - entities that own other records

pub mod hero;

pub use hero::{
    Hero, MAX_HERO_AGE_YEARS, MAX_HERO_CODENAME_LENGTH, MAX_HERO_HEIGHT, MAX_HERO_NAME_LENGTH,
    MAX_HERO_WEIGHT, MIN_HERO_AGE_YEARS,
};
