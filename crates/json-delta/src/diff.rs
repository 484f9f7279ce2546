//! Structural differ.
//!
//! Compares two values and emits the ordered change-set that turns the first
//! into the second when replayed by [`crate::apply`]. Branches shared by
//! reference between the two snapshots are skipped without being walked, so
//! diffing two large, mostly-shared states costs only the differing region.

use json_delta_value::{Map, PathStep, Value};

use crate::types::{ChangeRecord, ChangeSet};

/// Compute the change-set from `lhs` to `rhs`.
pub fn diff(lhs: &Value, rhs: &Value) -> ChangeSet {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    diff_inner(present(lhs), present(rhs), &mut path, &mut changes);
    changes
}

/// `Undefined` counts as absent on either side.
fn present(value: &Value) -> Option<&Value> {
    (!value.is_undefined()).then_some(value)
}

fn diff_inner(
    lhs: Option<&Value>,
    rhs: Option<&Value>,
    path: &mut Vec<PathStep>,
    out: &mut ChangeSet,
) {
    let (lhs, rhs) = match (lhs, rhs) {
        (None, None) => return,
        (None, Some(rhs)) => {
            out.push(ChangeRecord::edit(path.clone(), rhs.clone()));
            return;
        }
        (Some(_), None) => {
            out.push(ChangeRecord::delete(path.clone()));
            return;
        }
        (Some(lhs), Some(rhs)) => (lhs, rhs),
    };

    if lhs.ptr_eq(rhs) {
        return;
    }
    if lhs.kind() != rhs.kind() {
        out.push(ChangeRecord::edit(path.clone(), rhs.clone()));
        return;
    }
    match (lhs, rhs) {
        (Value::Array(l), Value::Array(r)) => diff_arrays(l, r, path, out),
        (Value::Object(l), Value::Object(r)) => diff_objects(l, r, path, out),
        // Dates and patterns compare as whole values; no descent.
        // Everything else is a primitive, where Value equality already
        // treats two NaNs as equal.
        _ => {
            if lhs != rhs {
                out.push(ChangeRecord::edit(path.clone(), rhs.clone()));
            }
        }
    }
}

/// Walk `lhs` keys in insertion order (matched keys recurse, lhs-only keys
/// delete), then the remaining `rhs`-only keys in `rhs` order (creates).
fn diff_objects(lhs: &Map, rhs: &Map, path: &mut Vec<PathStep>, out: &mut ChangeSet) {
    for (key, lv) in lhs {
        path.push(PathStep::Key(key.clone()));
        diff_inner(present(lv), rhs.get(key).and_then(present), path, out);
        path.pop();
    }
    for (key, rv) in rhs {
        if lhs.contains_key(key) {
            continue;
        }
        path.push(PathStep::Key(key.clone()));
        diff_inner(None, present(rv), path, out);
        path.pop();
    }
}

/// Same two-pass walk with indices for keys. Holes enumerate as absent, like
/// the keys they are not.
fn diff_arrays(lhs: &[Value], rhs: &[Value], path: &mut Vec<PathStep>, out: &mut ChangeSet) {
    for (i, lv) in lhs.iter().enumerate() {
        if lv.is_undefined() {
            continue;
        }
        path.push(PathStep::Index(i));
        diff_inner(Some(lv), rhs.get(i).and_then(present), path, out);
        path.pop();
    }
    for (i, rv) in rhs.iter().enumerate() {
        if rv.is_undefined() {
            continue;
        }
        if lhs.get(i).is_some_and(|lv| !lv.is_undefined()) {
            continue;
        }
        path.push(PathStep::Index(i));
        diff_inner(None, Some(rv), path, out);
        path.pop();
    }
}
