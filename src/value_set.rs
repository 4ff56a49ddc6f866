//! Insertion-ordered, duplicate-collapsing set of extracted values.
//!
//! Index fields can be order sensitive ("primary value first"), so every
//! multi-valued extractor returns a [`ValueSet`]: the first occurrence of a
//! value fixes its position and later duplicates are dropped.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An ordered set of strings backed by [`IndexSet`].
///
/// Serializes as a plain JSON array in insertion order.
///
/// # Examples
///
/// ```
/// use marc_indexer::ValueSet;
///
/// let mut values = ValueSet::new();
/// values.insert("Smith");
/// values.insert("Jones");
/// values.insert("Smith");
/// assert_eq!(values.to_vec(), vec!["Smith", "Jones"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueSet {
    values: IndexSet<String>,
}

impl ValueSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        ValueSet::default()
    }

    /// Insert a value, returning `true` if it was not already present.
    ///
    /// An existing value keeps its original position.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    /// Check whether a value is present
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Number of distinct values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no value was collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value inserted first, if any
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Iterate over values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Borrow the values as a `Vec` in insertion order
    #[must_use]
    pub fn to_vec(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Join the values with a separator, or `None` when the set is empty
    #[must_use]
    pub fn join(&self, separator: &str) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_vec().join(separator))
        }
    }

    /// Append every value of `other` not already present, keeping order
    pub fn merge(&mut self, other: ValueSet) {
        self.values.extend(other.values);
    }
}

impl<S: Into<String>> Extend<S> for ValueSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ValueSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ValueSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_collapses_duplicates() {
        let mut set = ValueSet::new();
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_merge_keeps_first_position() {
        let mut left: ValueSet = ["main", "arts"].into_iter().collect();
        let right: ValueSet = ["law", "main"].into_iter().collect();
        left.merge(right);
        assert_eq!(left.to_vec(), vec!["main", "arts", "law"]);
    }

    #[test]
    fn test_join() {
        let set: ValueSet = ["1999", "c2000"].into_iter().collect();
        assert_eq!(set.join(", "), Some("1999, c2000".to_string()));
        assert_eq!(ValueSet::new().join(", "), None);
    }

    #[test]
    fn test_case_sensitive() {
        let set: ValueSet = ["Smith", "smith"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let set: ValueSet = ["x", "y", "x"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["x","y"]"#);
    }
}
