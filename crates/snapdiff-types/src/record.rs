use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::value::{write_json_str, Value};

/// One snapshot of an entity: a mapping from field name to [`Value`].
///
/// Keys enumerate in sorted order. That order carries no meaning for
/// diffing; it only makes output deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a field, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_json_str(f, key)?;
            write!(f, ":{value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Record {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut record = Record::new();
        assert!(record.insert("age", 30).is_none());
        assert_eq!(record.insert("age", 31), Some(Value::from(30)));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("age"), Some(&Value::from(31)));
    }

    #[test]
    fn keys_are_sorted() {
        let record: Record = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn remove_and_contains() {
        let mut record: Record = [("x", true)].into_iter().collect();
        assert!(record.contains_key("x"));
        assert_eq!(record.remove("x"), Some(Value::Bool(true)));
        assert!(record.is_empty());
    }

    #[test]
    fn display_is_compact_object() {
        let record: Record = [("name", Value::from("Anna")), ("age", Value::from(30))]
            .into_iter()
            .collect();
        assert_eq!(record.to_string(), r#"{"age":30,"name":"Anna"}"#);
    }

    #[test]
    fn display_escapes_keys_as_json() {
        let record: Record = [("s\u{1b}", "x\u{1b}")].into_iter().collect();
        assert_eq!(record.to_string(), r#"{"s\u001b":"x\u001b"}"#);
    }
}
