//! Point-in-time capture of submitted form values.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered mapping from field name to submitted value.
///
/// Entries keep insertion order, which is the order `evaluate_form`
/// visits them. Inserting an existing name replaces the value in place.
///
/// # Example
///
/// ```rust
/// use formguard::core::FormSnapshot;
///
/// let snapshot = FormSnapshot::new()
///     .with("phone", "050-1234567")
///     .with("fullName", "אבי כהן");
///
/// let names: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, vec!["phone", "fullName"]);
/// assert_eq!(snapshot.get("phone"), Some("050-1234567"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, keeping the original position of existing names.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every captured value is the empty string.
    pub fn all_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_empty())
    }

    /// Render as a JSON object in insertion order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut snapshot = FormSnapshot::new();
        for (name, value) in iter {
            snapshot.insert(name, value);
        }
        snapshot
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
