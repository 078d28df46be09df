//! Use cases - validation, orchestration and projection per operation.
//!
//! Handlers call straight into these; each call validates its command before
//! touching any entity.

pub mod management;
pub mod projection;
pub mod validation;

use superhero_domain::DomainError;

use crate::infrastructure::ports::RepoError;

pub use management::{HeroCrud, ManagementUseCases, SuperPowerCrud};
pub use validation::{ValidationError, ValidationErrors};

/// Shared error type for use cases.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl UseCaseError {
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}
