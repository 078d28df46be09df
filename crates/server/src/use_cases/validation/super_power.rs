//! Superpower command validation. No lookups are involved.

use superhero_domain::{MAX_SUPER_POWER_DESCRIPTION_LENGTH, MAX_SUPER_POWER_NAME_LENGTH};
use superhero_shared::SuperPowerRequest;

use super::{require_max_length, require_non_empty, ValidationErrors};

use super::hero::NAME;
pub const DESCRIPTION: &str = "description";

pub fn validate_super_power(request: &SuperPowerRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check(|| {
        require_non_empty(&request.name, NAME)?;
        require_max_length(&request.name, MAX_SUPER_POWER_NAME_LENGTH, NAME)
    });

    if let Some(description) = &request.description {
        errors.check(|| {
            require_max_length(description, MAX_SUPER_POWER_DESCRIPTION_LENGTH, DESCRIPTION)
        });
    }

    errors.into_result()
}
