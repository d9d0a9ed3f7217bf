//! Keyword option bag passed to chunkers.
//!
//! Callers hand the dispatcher every option they know about; the dispatcher
//! narrows the bag down to the names a chunker declares before invoking it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ChunkError;

/// Name of the option every chunker accepts.
pub const MAX_CHARACTERS: &str = "max_characters";

/// Named chunking options.
///
/// A `null` value is treated the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkOptions(BTreeMap<String, Value>);

impl ChunkOptions {
    /// Create an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an option, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Raw value of an option.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Option names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the options whose name is in `names`.
    #[must_use]
    pub fn retain_names<S: AsRef<str>>(&self, names: &[S]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(key, _)| names.iter().any(|name| name.as_ref() == key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// The hard chunk-size limit, if one was given.
    pub fn max_characters(&self) -> Result<Option<usize>, ChunkError> {
        self.get_usize(MAX_CHARACTERS)
    }

    /// Read a non-negative integer option.
    pub fn get_usize(&self, name: &str) -> Result<Option<usize>, ChunkError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| ChunkError::InvalidOption {
                    name: name.to_string(),
                    expected: "a non-negative integer",
                }),
        }
    }

    /// Read a boolean option.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>, ChunkError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ChunkError::InvalidOption {
                name: name.to_string(),
                expected: "a boolean",
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ChunkOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_is_empty() {
        let options = ChunkOptions::new();
        assert!(options.is_empty());
        assert_eq!(options.len(), 0);
    }

    #[test]
    fn test_builder_and_lookup() {
        let options = ChunkOptions::new()
            .with("max_characters", 750)
            .with("foo", "bar");

        assert_eq!(options.len(), 2);
        assert!(options.contains_key("foo"));
        assert_eq!(options.get("foo"), Some(&json!("bar")));
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["foo", "max_characters"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut options = ChunkOptions::new();
        assert!(options.insert("overlap", 10).is_none());
        assert_eq!(options.insert("overlap", 20), Some(json!(10)));
        assert_eq!(options.get_usize("overlap").unwrap(), Some(20));
    }

    #[test]
    fn test_retain_names_is_exact() {
        let options = ChunkOptions::new()
            .with("max_characters", 750)
            .with("max_characters_x", 1)
            .with("foo", "bar");

        let kept = options.retain_names(&["max_characters", "overlap"]);
        assert_eq!(kept.keys().collect::<Vec<_>>(), vec!["max_characters"]);
        // Source bag is untouched
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_max_characters_absent_and_null() {
        assert_eq!(ChunkOptions::new().max_characters().unwrap(), None);
        let options = ChunkOptions::new().with("max_characters", Value::Null);
        assert_eq!(options.max_characters().unwrap(), None);
    }

    #[test]
    fn test_max_characters_present() {
        let options = ChunkOptions::new().with("max_characters", 750);
        assert_eq!(options.max_characters().unwrap(), Some(750));
    }

    #[test]
    fn test_get_usize_rejects_negative_and_non_integers() {
        let options = ChunkOptions::new()
            .with("a", -1)
            .with("b", 1.5)
            .with("c", "10");

        for name in ["a", "b", "c"] {
            let err = options.get_usize(name).unwrap_err();
            assert_eq!(
                err,
                ChunkError::InvalidOption {
                    name: name.to_string(),
                    expected: "a non-negative integer",
                }
            );
        }
    }

    #[test]
    fn test_get_bool() {
        let options = ChunkOptions::new().with("yes", true).with("bad", 1);
        assert_eq!(options.get_bool("yes").unwrap(), Some(true));
        assert_eq!(options.get_bool("missing").unwrap(), None);
        assert!(options.get_bool("bad").is_err());
    }

    #[test]
    fn test_from_iterator() {
        let options: ChunkOptions = [("overlap", json!(5)), ("overlap_all", json!(true))]
            .into_iter()
            .collect();
        assert_eq!(options.get_usize("overlap").unwrap(), Some(5));
        assert_eq!(options.get_bool("overlap_all").unwrap(), Some(true));
    }

    #[test]
    fn test_deserializes_from_json_object() {
        let options: ChunkOptions =
            serde_json::from_value(json!({"max_characters": 200, "foo": "bar"})).unwrap();
        assert_eq!(options.max_characters().unwrap(), Some(200));
        assert_eq!(options.len(), 2);
    }
}
