//! Response DTOs - the wire shape of heroes and superpowers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperPowerDto {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDto {
    pub id: i64,
    pub name: String,
    pub codename: String,
    pub height: f64,
    pub weight: f64,
    #[serde(
        default,
        with = "crate::wire_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_birth: Option<NaiveDate>,
    #[serde(rename = "superPower")]
    pub super_powers: Vec<SuperPowerDto>,
}
