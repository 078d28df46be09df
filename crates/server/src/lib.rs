//! Superhero Registry server library.
//!
//! ## Structure
//!
//! - `use_cases/` - validation, CRUD orchestration and DTO projection
//! - `infrastructure/` - ports, the SQLite adapter, clock and config
//! - `api/` - HTTP entry points and the response envelope mapping
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end HTTP tests over an in-memory database.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
