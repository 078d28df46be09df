//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, HeroRepo, SuperPowerRepo};
use crate::infrastructure::sqlite::SqliteRepositories;
use crate::use_cases::{HeroCrud, ManagementUseCases, SuperPowerCrud, UseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

impl App {
    pub fn new(repositories: SqliteRepositories, clock: Arc<dyn ClockPort>) -> Self {
        Self::from_ports(repositories.hero, repositories.super_power, clock)
    }

    /// Wire the use cases over any repository implementations.
    pub fn from_ports(
        heroes: Arc<dyn HeroRepo>,
        super_powers: Arc<dyn SuperPowerRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let management = ManagementUseCases::new(
            HeroCrud::new(heroes, super_powers.clone(), clock),
            SuperPowerCrud::new(super_powers),
        );

        Self {
            use_cases: UseCases { management },
        }
    }
}
