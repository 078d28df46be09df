//! `dateBirth` wire format.
//!
//! Accepts `YYYY-MM-DD` or an ISO/RFC 3339 timestamp on input and always
//! writes `YYYY-MM-DD`. Use with `#[serde(default, with = "crate::wire_date")]`
//! on an `Option<NaiveDate>` field.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => superhero_domain::common::parse_date(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
