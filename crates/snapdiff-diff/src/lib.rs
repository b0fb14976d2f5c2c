//! Structural equality and partial-update diffs for snapdiff.
//!
//! Given the previous snapshot of an entity and an updated one, produce the
//! payload of fields that changed. Changed nested values are carried whole;
//! the diff is never recursive.
//!
//! # Key Types
//!
//! - [`structural_equal`] / [`optional_equal`] -- Deep equality over values
//! - [`compute_diff`] / [`Diff`] -- Changed fields of an updated record
//! - [`describe_changes`] / [`ChangeSet`] / [`FieldChange`] -- Audit view (added/modified/removed)
//! - [`apply_diff`] -- Overlay a diff onto a previous record
//! - [`CompareOptions`] -- Null and NaN comparison policies

pub mod apply;
pub mod change_set;
pub mod diff;
pub mod equal;
pub mod error;
pub mod options;

pub use apply::apply_diff;
pub use change_set::{describe_changes, describe_changes_with, ChangeSet, FieldChange};
pub use diff::{compute_diff, compute_diff_with, compute_json_diff, Diff};
pub use equal::{optional_equal, structural_equal, structural_equal_with};
pub use error::{DiffError, DiffResult};
pub use options::{CompareOptions, NanPolicy, NullPolicy};
