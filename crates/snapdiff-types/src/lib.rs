//! Value model for snapdiff.
//!
//! Snapshots of an entity are plain data: a [`Record`] maps field names to
//! dynamically typed [`Value`]s. Every other snapdiff crate depends on
//! `snapdiff-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Tagged dynamic value (null, bool, number, string, array, object)
//! - [`Record`] — String-keyed mapping of values, one entity snapshot
//! - [`ValueError`] — Failures at the JSON boundary

pub mod error;
pub mod json;
pub mod record;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use record::Record;
pub use value::Value;
