//! Request parameter values and their normalization to a single string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

/// A request parameter as it arrives from a parser: missing, given once, or
/// repeated (e.g. `?id=1&id=2`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

/// Collapses a parameter into one string.
///
/// A repeated parameter yields its first value and drops the rest; an empty
/// list and an absent parameter both yield `""`, the same as a parameter
/// given explicitly as empty. Callers that need every value should match on
/// [`ParamValue::Multiple`] themselves.
pub fn normalize_param(value: &ParamValue) -> String {
    match value {
        ParamValue::Multiple(values) => values.first().cloned().unwrap_or_default(),
        ParamValue::Single(value) => value.clone(),
        ParamValue::Absent => String::new(),
    }
}

/// Reads every occurrence of `name` from the query string of `url`.
pub fn param_from_url(url: &Url, name: &str) -> ParamValue {
    let mut values: Vec<String> = url
        .query_pairs()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .collect();
    match values.len() {
        0 => ParamValue::Absent,
        1 => ParamValue::Single(values.remove(0)),
        _ => ParamValue::Multiple(values),
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Option<String>> for ParamValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(ParamValue::Absent, ParamValue::Single)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Single(String),
    Multiple(Vec<String>),
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            None => ParamValue::Absent,
            Some(Repr::Single(value)) => ParamValue::Single(value),
            Some(Repr::Multiple(values)) => ParamValue::Multiple(values),
        })
    }
}

impl Serialize for ParamValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParamValue::Absent => serializer.serialize_none(),
            ParamValue::Single(value) => serializer.serialize_str(value),
            ParamValue::Multiple(values) => values.serialize(serializer),
        }
    }
}
