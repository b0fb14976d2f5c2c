//! Partial-update diffs: which fields of an updated record changed.

use snapdiff_types::{Record, Value};
use tracing::{debug, trace};

use crate::equal::optional_equal;
use crate::error::{DiffError, DiffResult};
use crate::options::CompareOptions;

/// The changed fields of an updated record.
///
/// Every key is a key of the updated record, and every value is copied
/// verbatim from it. A nested object with one changed field appears whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diff(Record);

impl Diff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_record(&self) -> &Record {
        &self.0
    }

    pub fn into_record(self) -> Record {
        self.0
    }
}

impl From<Record> for Diff {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl From<Diff> for Record {
    fn from(diff: Diff) -> Self {
        diff.0
    }
}

/// Compute the diff between a previous record and an updated one, using the
/// default (strict) options.
///
/// `current` is `None` when there is no previous snapshot; every field of
/// `updated` is then a change.
pub fn compute_diff(current: Option<&Record>, updated: &Record) -> Diff {
    compute_diff_with(current, updated, &CompareOptions::default())
}

/// Compute the diff under the given options.
///
/// Only keys of `updated` are visited. A key present in `current` but not in
/// `updated` never appears in the result.
pub fn compute_diff_with(
    current: Option<&Record>,
    updated: &Record,
    options: &CompareOptions,
) -> Diff {
    let mut changed = Record::new();

    for (key, new_val) in updated {
        let old_val = current.and_then(|record| record.get(key));
        if !optional_equal(old_val, Some(new_val), options) {
            trace!(key = %key, "field changed");
            changed.insert(key.clone(), new_val.clone());
        }
    }

    debug!(
        changed = changed.len(),
        total = updated.len(),
        has_current = current.is_some(),
        "computed diff"
    );

    Diff(changed)
}

/// Diff two JSON documents directly.
///
/// Both documents must be JSON objects. The result is a JSON object holding
/// the changed fields.
pub fn compute_json_diff(
    current: Option<&serde_json::Value>,
    updated: &serde_json::Value,
    options: &CompareOptions,
) -> DiffResult<serde_json::Value> {
    let current = current
        .map(|json| Record::try_from(json.clone()))
        .transpose()
        .map_err(DiffError::Current)?;
    let updated = Record::try_from(updated.clone()).map_err(DiffError::Updated)?;

    compute_diff_with(current.as_ref(), &updated, options)
        .as_record()
        .to_json()
        .map_err(DiffError::Output)
}
