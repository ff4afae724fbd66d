//! # Data Transfer Objects
//!
//! Request and response types for the API surface. Response timestamps are
//! serialized as `YYYY-MM-DDTHH:MM:SSZ`.

pub mod pull_requests;
pub mod statistics;
pub mod teams;
pub mod users;

/// Serde helpers for the API timestamp format.
pub(crate) mod json_time {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    /// Wire format for timestamps: `YYYY-MM-DDTHH:MM:SSZ`.
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn serialize_option<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serialize(ts, serializer),
            None => serializer.serialize_none(),
        }
    }
}
