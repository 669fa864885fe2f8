//! Query parameter assembly.
//!
//! [`QueryParams`] is an ordered key/value mapping that only records values a
//! caller actually supplied. Every endpoint request builds its query through
//! the same three inclusion rules:
//!
//! - text values are kept when present and non-empty
//! - numeric filters are kept when present and non-zero
//! - flags are sent as `"1"` when `true` and omitted otherwise

use std::fmt;

use serde::Serialize;

/// A single query-string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Number(u64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

/// Value sent for a flag set to `true`. The API has no encoding for `false`.
pub const FLAG_TRUE: &str = "1";

/// Ordered query parameter mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` unconditionally, replacing any earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Include `key` only for a present, non-empty string.
    #[must_use]
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.insert(key, v);
        }
        self
    }

    /// Include `key` only for a present, non-zero number.
    #[must_use]
    pub fn number(mut self, key: &str, value: Option<u64>) -> Self {
        if let Some(v) = value.filter(|v| *v != 0) {
            self.insert(key, v);
        }
        self
    }

    /// Include `key` as [`FLAG_TRUE`] only when the flag is set.
    #[must_use]
    pub fn flag(mut self, key: &str, value: Option<bool>) -> Self {
        if value == Some(true) {
            self.insert(key, FLAG_TRUE);
        }
        self
    }

    /// Overlay `other` onto `self`; keys in `other` win.
    #[must_use]
    pub fn merged(mut self, other: &QueryParams) -> Self {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}
