//! Deep structural equality over [`Value`]s.
//!
//! Rules, first match wins:
//!
//! 1. The same value by reference is equal to itself.
//! 2. Null equals only null.
//! 3. Different variants are never equal; there is no coercion between
//!    `1` and `"1"`.
//! 4. Arrays are equal when their lengths match and every index is equal.
//! 5. Objects are equal when their key counts match and every key of the
//!    left side exists on the right with an equal value.
//! 6. Scalars of the same variant compare by value, with `NaN` governed by
//!    [`NanPolicy`].
//!
//! Absent values (a missing record or field) only appear at the top level
//! and are handled by [`optional_equal`].

use std::ptr;

use snapdiff_types::Value;

use crate::options::{CompareOptions, NanPolicy, NullPolicy};

/// Deep equality with the default (strict) options.
pub fn structural_equal(a: &Value, b: &Value) -> bool {
    structural_equal_with(a, b, &CompareOptions::default())
}

/// Deep equality under the given options.
pub fn structural_equal_with(a: &Value, b: &Value, options: &CompareOptions) -> bool {
    if ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(*x, *y, options.nan),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| structural_equal_with(x, y, options))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs.iter().all(|(key, x)| {
                    ys.get(key)
                        .is_some_and(|y| structural_equal_with(x, y, options))
                })
        }
        _ => false,
    }
}

/// Equality where either side may be absent.
///
/// Absent equals absent. Under [`NullPolicy::Loose`] absent also equals
/// null; under [`NullPolicy::Strict`] it equals nothing else.
pub fn optional_equal(a: Option<&Value>, b: Option<&Value>, options: &CompareOptions) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => structural_equal_with(a, b, options),
        (None, None) => true,
        (Some(v), None) | (None, Some(v)) => options.nulls == NullPolicy::Loose && v.is_null(),
    }
}

fn numbers_equal(x: f64, y: f64, nan: NanPolicy) -> bool {
    match nan {
        NanPolicy::Equal if x.is_nan() && y.is_nan() => true,
        _ => x == y,
    }
}
