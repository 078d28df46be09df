//! Superhero Shared - wire types for the HTTP API
//!
//! This crate contains the types that cross the HTTP boundary:
//! - Request bodies (`requests`)
//! - Response DTOs (`responses`)
//! - The uniform response envelope (`envelope`)
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **No domain IDs** - DTOs carry raw `i64` identifiers
//! 3. **camelCase on the wire** - absent optional fields are omitted

pub mod envelope;
pub mod requests;
pub mod responses;
pub mod wire_date;

pub use envelope::{ApiResult, ErrorCode, ErrorDetail, SUCCESS_MESSAGE};
pub use requests::{HeroRequest, SuperPowerRequest};
pub use responses::{HeroDto, SuperPowerDto};
