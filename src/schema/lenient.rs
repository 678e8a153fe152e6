//! Tolerant field decoding for hand-edited beatmap files
//!
//! Editors and hand edits leave values of the wrong JSON type behind (a
//! quoted rank, a fractional offset, a `null` list). Such a field decodes to
//! its zero value instead of failing the whole file; only broken JSON
//! syntax is an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, falling back to `T::default()` on `null` or a
/// value of the wrong type
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserialize a list element by element
///
/// A non-array value gives an empty list; an element of the wrong type
/// becomes `T::default()` and keeps its position.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}
