//! Hero command validation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use superhero_domain::common::{age_in_years, years_before};
use superhero_domain::{
    distinct_ids, HeroId, SuperPowerId, MAX_HERO_AGE_YEARS, MAX_HERO_CODENAME_LENGTH,
    MAX_HERO_HEIGHT, MAX_HERO_NAME_LENGTH, MAX_HERO_WEIGHT, MIN_HERO_AGE_YEARS,
};
use superhero_shared::HeroRequest;

use super::{
    require, require_greater_than, require_less_than, require_max_length, require_non_empty,
    require_non_empty_list, require_present, ValidationError, ValidationErrors,
};
use crate::infrastructure::ports::{ClockPort, HeroRepo, SuperPowerRepo};
use crate::use_cases::UseCaseError;

pub const NAME: &str = "name";
pub const CODENAME: &str = "codename";
pub const SUPERPOWER_IDS: &str = "superpowerIds";
pub const DATE_BIRTH: &str = "dateBirth";
pub const HEIGHT: &str = "height";
pub const WEIGHT: &str = "weight";

/// Validates create and update hero commands, including the lookups.
pub struct HeroValidator {
    heroes: Arc<dyn HeroRepo>,
    super_powers: Arc<dyn SuperPowerRepo>,
    clock: Arc<dyn ClockPort>,
}

impl HeroValidator {
    pub fn new(
        heroes: Arc<dyn HeroRepo>,
        super_powers: Arc<dyn SuperPowerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            heroes,
            super_powers,
            clock,
        }
    }

    /// Check every field of `request`.
    ///
    /// `existing` is the hero being updated, so its own codename does not
    /// count as taken.
    pub async fn validate(
        &self,
        request: &HeroRequest,
        existing: Option<HeroId>,
    ) -> Result<(), UseCaseError> {
        let today = self.clock.now().date_naive();
        let mut errors = ValidationErrors::new();

        errors.check(|| check_name(&request.name));

        errors.check(|| check_codename(&request.codename));
        if !errors.has_failed(CODENAME) {
            let codename = request.codename.trim();
            if self.heroes.codename_exists(codename, existing).await? {
                errors.push(ValidationError::invalid(
                    CODENAME,
                    format!("'{codename}' is already used by another hero"),
                ));
            }
        }

        errors.check(|| check_superpower_ids(request.superpower_ids.as_deref()));
        if !errors.has_failed(SUPERPOWER_IDS) {
            let requested = request
                .superpower_ids
                .as_deref()
                .map(|ids| ids.iter().copied().map(SuperPowerId::new).collect::<Vec<_>>())
                .unwrap_or_default();
            let requested = distinct_ids(&requested);
            let existing_ids: HashSet<SuperPowerId> = self
                .super_powers
                .find_existing(&requested)
                .await?
                .into_iter()
                .collect();
            let missing: Vec<String> = requested
                .iter()
                .filter(|id| !existing_ids.contains(id))
                .map(ToString::to_string)
                .collect();
            if !missing.is_empty() {
                errors.push(ValidationError::invalid(
                    SUPERPOWER_IDS,
                    format!("superpowers not found: {}", missing.join(", ")),
                ));
            }
        }

        if let Some(date_birth) = request.date_birth {
            errors.check(|| check_date_birth(date_birth, today));
        }
        errors.check(|| check_height(request.height));
        errors.check(|| check_weight(request.weight));

        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "Hero command rejected");
        }
        errors.into_result().map_err(UseCaseError::Validation)
    }
}

// =============================================================================
// Field rules
// =============================================================================

fn check_name(name: &str) -> Result<(), ValidationError> {
    require_non_empty(name, NAME)?;
    require_max_length(name, MAX_HERO_NAME_LENGTH, NAME)
}

fn check_codename(codename: &str) -> Result<(), ValidationError> {
    require_non_empty(codename, CODENAME)?;
    require_max_length(codename, MAX_HERO_CODENAME_LENGTH, CODENAME)
}

fn check_superpower_ids(ids: Option<&[i64]>) -> Result<(), ValidationError> {
    let ids = require_present(ids, SUPERPOWER_IDS)?;
    require_non_empty_list(ids, SUPERPOWER_IDS)?;
    require(ids.iter().all(|id| *id > 0), SUPERPOWER_IDS, || {
        "every id must be greater than 0".to_string()
    })?;

    let mut seen = HashSet::with_capacity(ids.len());
    let distinct = ids.iter().all(|id| seen.insert(*id));
    require(distinct, SUPERPOWER_IDS, || "contains duplicate ids".to_string())
}

fn check_height(height: f64) -> Result<(), ValidationError> {
    require_greater_than(height, 0.0, HEIGHT)?;
    require_less_than(height, MAX_HERO_HEIGHT, HEIGHT)
}

fn check_weight(weight: f64) -> Result<(), ValidationError> {
    require_greater_than(weight, 0.0, WEIGHT)?;
    require_less_than(weight, MAX_HERO_WEIGHT, WEIGHT)
}

fn check_date_birth(date_birth: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    require(date_birth <= today, DATE_BIRTH, || {
        "cannot be in the future".to_string()
    })?;

    let too_old = years_before(today, MAX_HERO_AGE_YEARS).is_some_and(|oldest| date_birth < oldest);
    require(!too_old, DATE_BIRTH, || {
        format!("cannot be more than {MAX_HERO_AGE_YEARS} years ago")
    })?;

    let too_young =
        years_before(today, MIN_HERO_AGE_YEARS).is_some_and(|youngest| date_birth > youngest);
    require(!too_young, DATE_BIRTH, || {
        format!("hero must be at least {MIN_HERO_AGE_YEARS} years old")
    })?;

    let after_cutoff =
        NaiveDate::from_ymd_opt(1800, 1, 1).is_some_and(|cutoff| date_birth > cutoff);
    require(after_cutoff, DATE_BIRTH, || "must be after 1800-01-01".to_string())?;

    let age = age_in_years(date_birth, today);
    let realistic = age >= MIN_HERO_AGE_YEARS as i32 && age <= MAX_HERO_AGE_YEARS as i32;
    require(realistic, DATE_BIRTH, || {
        format!("an age of {age} years is not realistic")
    })
}
