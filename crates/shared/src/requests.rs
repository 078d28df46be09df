//! Request bodies accepted by the HTTP API.
//!
//! Every field defaults when missing so that an incomplete body reaches the
//! validators (and produces field-level errors) instead of failing to parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/heroes` and `PUT /api/heroes/{id}`.
///
/// On update the id always comes from the path; an `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroRequest {
    pub name: String,
    pub codename: String,
    /// `None` when the client sent `null` or left the list out.
    pub superpower_ids: Option<Vec<i64>>,
    #[serde(with = "crate::wire_date", skip_serializing_if = "Option::is_none")]
    pub date_birth: Option<NaiveDate>,
    pub height: f64,
    pub weight: f64,
}

/// Body of `POST /api/superpowers` and `PUT /api/superpowers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuperPowerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
