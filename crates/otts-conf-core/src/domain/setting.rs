//! Setting values and setting requests.
//!
//! A [`SettingRequest`] is built fresh for every patch run: it maps each
//! setting name the operator wants to change to the new [`SettingValue`].
//!
//! # Serialization rules
//!
//! `openttsd.conf` encodes booleans as a two-value numeric code rather than
//! `true`/`false`:
//!
//! | Value               | Written as |
//! |---------------------|------------|
//! | `Boolean(true)`     | `1`        |
//! | `Boolean(false)`    | `2`        |
//! | `Integer(n)`        | `n`        |
//! | `Text(s)`           | `s`        |

use std::fmt;

/// A typed value for a single configuration setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl SettingValue {
    /// Returns the text written after the setting name in the config file.
    pub fn serialize(&self) -> String {
        match self {
            SettingValue::Boolean(true) => "1".to_string(),
            SettingValue::Boolean(false) => "2".to_string(),
            SettingValue::Integer(n) => n.to_string(),
            SettingValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Boolean(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Integer(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Integer(i64::from(value))
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

/// Mapping from unique setting name to replacement value.
///
/// Entries keep their insertion order, which is also the order in which the
/// patcher tries them against each line.  Setting a name twice replaces the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingRequest {
    entries: Vec<(String, SettingValue)>,
}

impl SettingRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`SettingRequest::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Requests `name` to be set to `value`, replacing any earlier value for
    /// the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the requested value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SettingRequest
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = SettingRequest::new();
        for (name, value) in iter {
            request.set(name, value);
        }
        request
    }
}
