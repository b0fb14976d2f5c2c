use snapdiff_types::Record;
use tracing::debug;

use crate::diff::Diff;

/// Overlay a diff onto the previous record, as the receiver of a
/// partial-update payload would.
///
/// Every diff key overwrites the field of the same name; fields the diff
/// does not mention are kept. Nothing is ever removed. With no previous
/// record the result is the diff itself.
///
/// Applying a diff reproduces every field of the updated record only when
/// the diff was computed with [`NullPolicy::Strict`]. Under
/// [`NullPolicy::Loose`] a field that became null is not in the diff, so it
/// keeps its old value or stays missing.
///
/// [`NullPolicy::Strict`]: crate::options::NullPolicy::Strict
/// [`NullPolicy::Loose`]: crate::options::NullPolicy::Loose
pub fn apply_diff(current: Option<&Record>, diff: &Diff) -> Record {
    let mut merged = current.cloned().unwrap_or_default();
    merged.extend(diff.iter().map(|(key, value)| (key.clone(), value.clone())));

    debug!(applied = diff.len(), fields = merged.len(), "applied diff");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{compute_diff, compute_diff_with};
    use crate::options::{CompareOptions, NullPolicy};
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(json).unwrap()
    }

    #[test]
    fn overwrites_and_adds() {
        let current = record(json!({"name": "Anna", "age": 30}));
        let diff = Diff::from(record(json!({"age": 31, "city": "Warsaw"})));

        let merged = apply_diff(Some(&current), &diff);
        assert_eq!(
            merged,
            record(json!({"name": "Anna", "age": 31, "city": "Warsaw"}))
        );
    }

    #[test]
    fn nested_values_replace_whole() {
        let current = record(json!({"a": {"x": 1, "y": 2, "z": 3}}));
        let diff = Diff::from(record(json!({"a": {"y": 99}})));

        let merged = apply_diff(Some(&current), &diff);
        assert_eq!(merged, record(json!({"a": {"y": 99}})));
    }

    #[test]
    fn absent_current_yields_diff() {
        let diff = Diff::from(record(json!({"x": 1})));
        assert_eq!(apply_diff(None, &diff), record(json!({"x": 1})));
    }

    #[test]
    fn keeps_fields_missing_from_update() {
        let current = record(json!({"keep": 1, "stale": 2}));
        let updated = record(json!({"keep": 5}));

        let merged = apply_diff(Some(&current), &compute_diff(Some(&current), &updated));
        assert_eq!(merged, record(json!({"keep": 5, "stale": 2})));
    }

    #[test]
    fn null_fields_survive_only_under_strict_nulls() {
        let updated = record(json!({"note": null, "x": 1}));

        let strict = apply_diff(None, &compute_diff(None, &updated));
        assert_eq!(strict, updated);

        let loose = CompareOptions {
            nulls: NullPolicy::Loose,
            ..CompareOptions::default()
        };
        let diff = compute_diff_with(None, &updated, &loose);
        assert!(!diff.contains_key("note"));
        assert_eq!(apply_diff(None, &diff), record(json!({"x": 1})));
    }
}
