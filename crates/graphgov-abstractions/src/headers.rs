//! Case-insensitive, multi-valued header map.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Header collection used for both requests and responses.
///
/// Keys are normalised to lowercase; each key holds an ordered, de-duplicated
/// list of values. Empty keys and empty values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, Vec<String>>,
}

/// Headers sent with a request.
pub type RequestHeaders = Headers;

/// Headers received with a response.
pub type ResponseHeaders = Headers;

fn normalize_key(key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_ascii_lowercase())
    }
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value to the header, keeping values already present.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(key) = normalize_key(key) else {
            return;
        };
        if value.is_empty() {
            return;
        }
        let values = self.entries.entry(key).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Adds the value only when the header is not present yet.
    ///
    /// Returns `true` when the value was added.
    pub fn try_add(&mut self, key: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let Some(key) = normalize_key(key) else {
            return false;
        };
        if value.is_empty() {
            return false;
        }
        match self.entries.entry(key) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(vec![value]);
                true
            }
        }
    }

    /// Merges every value of `other` into this collection.
    pub fn add_all(&mut self, other: &Headers) {
        for (key, values) in &other.entries {
            for value in values {
                self.add(key, value.clone());
            }
        }
    }

    /// Replaces all values of a header with a single value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.remove(key);
        self.add(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        let key = normalize_key(key)?;
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Removes a header and returns its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let key = normalize_key(key)?;
        self.entries.remove(&key)
    }

    /// Removes a single value; the header disappears with its last value.
    pub fn remove_value(&mut self, key: &str, value: &str) -> bool {
        let Some(key) = normalize_key(key) else {
            return false;
        };
        let Some(values) = self.entries.get_mut(&key) else {
            return false;
        };
        let before = values.len();
        values.retain(|v| v != value);
        let removed = values.len() != before;
        if values.is_empty() {
            self.entries.remove(&key);
        }
        removed
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        normalize_key(key).is_some_and(|key| self.entries.contains_key(&key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut headers = Headers::new();
        headers.add("Content-Type", "application/json");

        assert!(headers.contains_key("content-type"));
        assert!(headers.contains_key("CONTENT-TYPE"));
        assert_eq!(headers.first("Content-type"), Some("application/json"));
        assert_eq!(headers.keys().collect::<Vec<_>>(), vec!["content-type"]);
    }

    #[test]
    fn test_add_deduplicates_values() {
        let mut headers = Headers::new();
        headers.add("Prefer", "odata.maxpagesize=10");
        headers.add("prefer", "odata.maxpagesize=10");
        headers.add("prefer", "return=minimal");

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("Prefer").unwrap(),
            &["odata.maxpagesize=10".to_string(), "return=minimal".to_string()]
        );
    }

    #[test]
    fn test_try_add_only_when_absent() {
        let mut headers = Headers::new();
        assert!(headers.try_add("Accept", "application/json"));
        assert!(!headers.try_add("accept", "text/plain"));
        assert_eq!(headers.get("accept").unwrap(), &["application/json".to_string()]);
    }

    #[test]
    fn test_empty_keys_and_values_are_ignored() {
        let mut headers = Headers::new();
        headers.add("", "value");
        headers.add("key", "");
        assert!(!headers.try_add("  ", "value"));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_remove_value_drops_empty_header() {
        let mut headers = Headers::new();
        headers.add("x-ms-tag", "a");
        headers.add("x-ms-tag", "b");

        assert!(headers.remove_value("X-MS-TAG", "a"));
        assert_eq!(headers.first("x-ms-tag"), Some("b"));
        assert!(!headers.remove_value("x-ms-tag", "missing"));
        assert!(headers.remove_value("x-ms-tag", "b"));
        assert!(!headers.contains_key("x-ms-tag"));
    }

    #[test]
    fn test_add_all_and_set() {
        let mut first = Headers::new();
        first.add("a", "1");
        let mut second = Headers::new();
        second.add("A", "2");
        second.add("b", "3");

        first.add_all(&second);
        assert_eq!(first.get("a").unwrap().len(), 2);
        assert_eq!(first.first("b"), Some("3"));

        first.set("a", "9");
        assert_eq!(first.get("a").unwrap(), &["9".to_string()]);

        first.clear();
        assert!(first.is_empty());
    }
}
