//! SuperPower entity - An ability heroes can be linked to

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::error::DomainError;
use crate::SuperPowerId;

/// Maximum length of a superpower name, in characters.
pub const MAX_SUPER_POWER_NAME_LENGTH: usize = 50;

/// Maximum length of a superpower description, in characters.
pub const MAX_SUPER_POWER_DESCRIPTION_LENGTH: usize = 250;

/// A superpower that heroes reference by id.
///
/// Superpowers are never owned by a hero; deleting one only removes the
/// links pointing at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperPower {
    id: SuperPowerId,
    name: String,
    description: Option<String>,
}

impl SuperPower {
    /// Create an unsaved superpower. The name is trimmed and a blank
    /// description becomes `None`.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: SuperPowerId::UNASSIGNED,
            name: name.into().trim().to_string(),
            description: none_if_blank(description),
        }
    }

    /// Rebuild a superpower read back from the store.
    pub fn restore(id: SuperPowerId, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    #[inline]
    pub fn id(&self) -> SuperPowerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Record the id handed out by the store.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if an id was already assigned.
    pub fn assign_id(&mut self, id: SuperPowerId) -> Result<(), DomainError> {
        if self.id.is_assigned() {
            return Err(DomainError::constraint(format!(
                "SuperPower already has id {}",
                self.id
            )));
        }
        self.id = id;
        Ok(())
    }

    /// Overwrite name and description in place, normalized like [`SuperPower::new`].
    ///
    /// Returns `true` when at least one field actually changed.
    pub fn update(&mut self, name: impl Into<String>, description: Option<String>) -> bool {
        let name = name.into().trim().to_string();
        let description = none_if_blank(description);
        let changed = name != self.name || description != self.description;
        self.name = name;
        self.description = description;
        changed
    }
}
