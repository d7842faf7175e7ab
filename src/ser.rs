use crate::record::Level;
use crate::value::Value;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;

pub(crate) fn level<S: Serializer>(level: &Level, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(level.as_str())
}

pub(crate) fn timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
}

pub(crate) fn tags<S: Serializer>(
    tags: &BTreeMap<String, Value>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut model = serializer.serialize_map(Some(tags.len()))?;
    for (key, value) in tags {
        model.serialize_entry(key, value)?;
    }
    model.end()
}

pub(crate) fn tags_empty(tags: &BTreeMap<String, Value>) -> bool {
    tags.is_empty()
}
