//! Search criteria and their translation into a query string.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// A single criterion value.
///
/// Falsy values (empty text, zero, NaN, `false`, absent) are dropped when the
/// query string is built instead of being sent as empty parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Absent,
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FilterValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::Absent => false,
            FilterValue::Flag(b) => *b,
            FilterValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FilterValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Absent => Ok(()),
            FilterValue::Flag(b) => write!(f, "{b}"),
            FilterValue::Number(n) => f.write_str(&crate::protocol::js_number(*n)),
            FilterValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Flag(b)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FilterValue::Absent)
    }
}

/// Open, insertion-ordered key/value criteria (e.g. `industry`, `stage`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    entries: Vec<(String, FilterValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder-style [`Filter::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `application/x-www-form-urlencoded` query string of the truthy entries,
    /// in insertion order, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            if value.is_truthy() {
                serializer.append_pair(key, &value.to_string());
            }
        }
        serializer.finish()
    }

    /// Parse `KEY=VALUE` (as given on the command line).
    pub fn parse_pair(pair: &str) -> Option<(String, FilterValue)> {
        let (key, value) = pair.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), FilterValue::Text(value.trim().to_string())))
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Filter::new();
        for (k, v) in iter {
            filter.set(k, v);
        }
        filter
    }
}
