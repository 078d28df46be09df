//! Field validation for mutating commands.
//!
//! Each field's rules run in order and stop at the first failure. Failures
//! accumulate across fields, one per field, in the order fields are checked.

mod hero;
mod super_power;

use std::fmt::Display;

use superhero_domain::common::char_len;

pub use hero::{HeroValidator, CODENAME, DATE_BIRTH, HEIGHT, NAME, SUPERPOWER_IDS, WEIGHT};
pub use super_power::{validate_super_power, DESCRIPTION};

/// Field code used by delete commands.
pub const ID: &str = "id";

/// A single failed rule, scoped to one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} exceeds maximum length of {max} characters")]
    TooLong { field_name: &'static str, max: usize },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(field_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field_name,
            reason: reason.into(),
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Missing { field_name }
            | Self::Empty { field_name }
            | Self::TooLong { field_name, .. }
            | Self::Invalid { field_name, .. } => field_name,
        }
    }
}

/// Every failed field of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one field's rule chain; the first error it returns is recorded.
    pub fn check(&mut self, rules: impl FnOnce() -> Result<(), ValidationError>) {
        if let Err(error) = rules() {
            self.push(error);
        }
    }

    /// Record a failure unless its field already failed.
    pub fn push(&mut self, error: ValidationError) {
        if !self.has_failed(error.field_name()) {
            self.0.push(error);
        }
    }

    pub fn has_failed(&self, field_name: &str) -> bool {
        self.0.iter().any(|error| error.field_name() == field_name)
    }

    pub fn get(&self, field_name: &str) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field_name() == field_name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Generic rule: fail with `reason` unless `condition` holds.
pub fn require(
    condition: bool,
    field_name: &'static str,
    reason: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::invalid(field_name, reason()))
    }
}

/// Validate an optional value was supplied.
pub fn require_present<T>(
    value: Option<T>,
    field_name: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate the trimmed string doesn't exceed `max` characters.
pub fn require_max_length(
    value: &str,
    max: usize,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if char_len(value.trim()) > max {
        return Err(ValidationError::TooLong { field_name, max });
    }
    Ok(())
}

/// Validate a list has at least one item.
pub fn require_non_empty_list<T>(
    values: &[T],
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate `value > min`.
pub fn require_greater_than<T>(
    value: T,
    min: T,
    field_name: &'static str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    require(value > min, field_name, || format!("must be greater than {min}"))
}

/// Validate `value < max`.
pub fn require_less_than<T>(
    value: T,
    max: T,
    field_name: &'static str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    require(value < max, field_name, || format!("must be less than {max}"))
}

/// Validate the id of a delete command.
pub fn validate_id(id: i64) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check(|| require_greater_than(id, 0, ID));
    errors.into_result()
}
