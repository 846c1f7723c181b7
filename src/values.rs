//! Current form state as seen by the validators
//!
//! [`FormValues`] maps field names to whatever the user has typed so far. The
//! calling form owns it and passes a fresh snapshot on every validation call;
//! validators only ever borrow it.
//!
//! # Example
//!
//! ```rust
//! use fieldwise::FormValues;
//!
//! let values = FormValues::new()
//!     .with("email", "user@example.com")
//!     .with("password", "");
//!
//! assert_eq!(values.get("email"), Some("user@example.com"));
//! assert_eq!(values.get("password"), Some(""));
//! assert_eq!(values.get("name"), None);
//! ```

use std::collections::btree_map::{self, BTreeMap};

/// Mapping from field name to the field's current string value.
///
/// Keys are unique and iterate in sorted order. A missing key and an empty
/// string are distinct states; the rules decide how each is treated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FormValues {
    fields: BTreeMap<String, String>,
}

impl FormValues {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field and return `self`, for building snapshots inline.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Current value of `name`, or `None` if the field is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.fields.iter(),
        }
    }
}

/// Iterator over the fields of a [`FormValues`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values() {
        let values = FormValues::new();
        assert!(values.is_empty());
        assert_eq!(values.len(), 0);
        assert_eq!(values.get("anything"), None);
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let values = FormValues::from([("email", "")]);
        assert_eq!(values.get("email"), Some(""));
        assert_eq!(values.get("password"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut values = FormValues::new().with("name", "ann");
        assert_eq!(values.set("name", "anne"), Some("ann".to_string()));
        assert_eq!(values.get("name"), Some("anne"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn remove_field() {
        let mut values = FormValues::from([("a", "1"), ("b", "2")]);
        assert_eq!(values.remove("a"), Some("1".to_string()));
        assert_eq!(values.remove("a"), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn iterates_in_name_order() {
        let values: FormValues = vec![("b", "2"), ("a", "1"), ("c", "3")]
            .into_iter()
            .collect();
        let pairs: Vec<_> = values.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn extend_overwrites() {
        let mut values = FormValues::from([("a", "1")]);
        values.extend([("a", "x"), ("b", "y")]);
        assert_eq!(values.get("a"), Some("x"));
        assert_eq!(values.get("b"), Some("y"));
    }

    #[test]
    fn later_duplicate_keys_win() {
        let values = FormValues::from([("a", "1"), ("a", "2")]);
        assert_eq!(values.get("a"), Some("2"));
        assert_eq!(values.len(), 1);
    }
}
