//! HTML attribute maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name → value attribute map.
///
/// Attributes are kept sorted by name so rendered markup does not depend on
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    inner: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the updated map for chaining.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let attributes = Attributes::new().add("id", "email").add("name", "email");
        assert_eq!(attributes.get("id"), Some("email"));
        assert_eq!(attributes.len(), 2);
        assert!(attributes.has("name"));
        assert!(!attributes.has("class"));
    }

    #[test]
    fn test_set_replaces() {
        let mut attributes = Attributes::new().add("class", "a");
        attributes.set("class", "b");
        assert_eq!(attributes.get("class"), Some("b"));
    }

    #[test]
    fn test_iter_is_sorted_by_name() {
        let attributes: Attributes = vec![("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_deserializes_from_plain_map() {
        let attributes: Attributes = serde_json::from_str(r#"{"id": "x", "rows": "3"}"#).unwrap();
        assert_eq!(attributes.get("rows"), Some("3"));
    }
}
