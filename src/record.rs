//! The per-call log record and its serialized shape.

use crate::ser;
use crate::value::Value;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured log event, serialized as a single JSON line.
///
/// Field order here is the field order in the output. `trace` is present
/// only on error records, and `tags` is omitted when the emitting logger
/// carries none.
#[derive(Serialize)]
pub(crate) struct Record<'a> {
    #[serde(serialize_with = "ser::level")]
    pub(crate) level: Level,
    #[serde(serialize_with = "ser::timestamp")]
    pub(crate) event_time: DateTime<Utc>,
    pub(crate) message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trace: Option<String>,
    #[serde(serialize_with = "ser::tags", skip_serializing_if = "ser::tags_empty")]
    pub(crate) tags: &'a BTreeMap<String, Value>,
}
