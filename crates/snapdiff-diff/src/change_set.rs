//! Change reports: an audit view of the comparison behind a [`Diff`].
//!
//! Unlike a [`Diff`], a [`ChangeSet`] also lists fields that disappeared
//! from the updated record and keeps the old value of every modified field.
//! Removals are informational; they never enter a diff.

use snapdiff_types::{Record, Value};

use crate::diff::Diff;
use crate::equal::optional_equal;
use crate::options::CompareOptions;

/// The full set of field changes between two records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeSet {
    /// The list of field changes, ordered by key.
    pub changes: Vec<FieldChange>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added fields.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, FieldChange::Added { .. }))
            .count()
    }

    /// Number of removed fields.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, FieldChange::Removed { .. }))
            .count()
    }

    /// Number of modified fields.
    pub fn modifications(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, FieldChange::Modified { .. }))
            .count()
    }

    /// The partial-update payload for these changes: added and modified
    /// fields with their new values. Removals are dropped.
    pub fn to_diff(&self) -> Diff {
        self.changes
            .iter()
            .filter_map(|change| match change {
                FieldChange::Added { key, value } => Some((key.clone(), value.clone())),
                FieldChange::Modified { key, new, .. } => Some((key.clone(), new.clone())),
                FieldChange::Removed { .. } => None,
            })
            .collect::<Record>()
            .into()
    }
}

/// A single field change.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldChange {
    /// The field was absent before.
    Added { key: String, value: Value },
    /// The field exists only in the previous record.
    Removed { key: String, old: Value },
    /// The field exists on both sides with different values.
    Modified { key: String, old: Value, new: Value },
}

impl FieldChange {
    /// The field name this change refers to.
    pub fn key(&self) -> &str {
        match self {
            FieldChange::Added { key, .. }
            | FieldChange::Removed { key, .. }
            | FieldChange::Modified { key, .. } => key,
        }
    }
}

/// Describe the changes between two records with the default options.
pub fn describe_changes(current: Option<&Record>, updated: &Record) -> ChangeSet {
    describe_changes_with(current, updated, &CompareOptions::default())
}

/// Describe the changes between two records.
///
/// Fields are classified with the same equality as [`compute_diff_with`],
/// so the added and modified entries always match the diff.
/// Under [`NullPolicy::Loose`] a field that is null on one side and missing
/// on the other is not reported at all.
///
/// [`compute_diff_with`]: crate::diff::compute_diff_with
/// [`NullPolicy::Loose`]: crate::options::NullPolicy::Loose
pub fn describe_changes_with(
    current: Option<&Record>,
    updated: &Record,
    options: &CompareOptions,
) -> ChangeSet {
    let empty = Record::new();
    let old = current.unwrap_or(&empty);
    let mut changes = Vec::new();

    // Check for removed and modified keys.
    for (key, old_val) in old {
        let new_val = updated.get(key);
        if optional_equal(Some(old_val), new_val, options) {
            continue;
        }
        match new_val {
            Some(new_val) => changes.push(FieldChange::Modified {
                key: key.clone(),
                old: old_val.clone(),
                new: new_val.clone(),
            }),
            None => changes.push(FieldChange::Removed {
                key: key.clone(),
                old: old_val.clone(),
            }),
        }
    }

    // Check for added keys.
    for (key, new_val) in updated {
        if !old.contains_key(key) && !optional_equal(None, Some(new_val), options) {
            changes.push(FieldChange::Added {
                key: key.clone(),
                value: new_val.clone(),
            });
        }
    }

    changes.sort_by(|a, b| a.key().cmp(b.key()));
    ChangeSet { changes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::options::NullPolicy;
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(json).unwrap()
    }

    #[test]
    fn identical_records_no_changes() {
        let state = record(json!({"a": 1, "b": "hello"}));
        let changes = describe_changes(Some(&state), &state);
        assert!(changes.is_empty());
    }

    #[test]
    fn absent_to_populated() {
        let new = record(json!({"x": 42, "y": "new"}));

        let changes = describe_changes(None, &new);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes.additions(), 2);
        assert_eq!(changes.removals(), 0);
    }

    #[test]
    fn populated_to_empty() {
        let old = record(json!({"x": 42}));

        let changes = describe_changes(Some(&old), &Record::new());
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.removals(), 1);
        assert!(changes.to_diff().is_empty());
    }

    #[test]
    fn single_key_modification() {
        let old = record(json!({"count": 1}));
        let new = record(json!({"count": 2}));

        let changes = describe_changes(Some(&old), &new);
        assert_eq!(changes.modifications(), 1);

        match &changes.changes[0] {
            FieldChange::Modified { key, old, new } => {
                assert_eq!(key, "count");
                assert_eq!(*old, Value::from(1));
                assert_eq!(*new, Value::from(2));
            }
            other => panic!("expected Modified, got {:?}", other),
        }
    }

    #[test]
    fn mixed_changes_sorted_by_key() {
        let old = record(json!({
            "keep": true,
            "modify": "old",
            "remove": 42,
        }));
        let new = record(json!({
            "keep": true,
            "modify": "new",
            "added": [1, 2, 3],
        }));

        let changes = describe_changes(Some(&old), &new);
        assert_eq!(changes.len(), 3);
        assert_eq!(changes.additions(), 1);
        assert_eq!(changes.removals(), 1);
        assert_eq!(changes.modifications(), 1);

        let keys: Vec<&str> = changes.changes.iter().map(FieldChange::key).collect();
        assert_eq!(keys, ["added", "modify", "remove"]);
    }

    #[test]
    fn to_diff_matches_compute_diff() {
        let old = record(json!({"a": 1, "b": {"x": [1, 2]}, "c": null, "gone": 0}));
        let new = record(json!({"a": 1, "b": {"x": [2, 1]}, "c": false, "d": "new"}));

        let changes = describe_changes(Some(&old), &new);
        assert_eq!(changes.to_diff(), compute_diff(Some(&old), &new));
    }

    #[test]
    fn loose_nulls_hide_null_only_changes() {
        let old = record(json!({"a": null}));
        let new = record(json!({"b": null}));
        let loose = CompareOptions {
            nulls: NullPolicy::Loose,
            ..CompareOptions::default()
        };

        assert!(describe_changes_with(Some(&old), &new, &loose).is_empty());

        let strict = describe_changes(Some(&old), &new);
        assert_eq!(strict.additions(), 1);
        assert_eq!(strict.removals(), 1);
    }
}
