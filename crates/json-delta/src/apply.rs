//! Patch replay: fold a change-set over a base value.

use json_delta_value::{PathStep, Value};

use crate::nav::{get_in, set_path, unset_path};
use crate::types::ChangeRecord;

/// Replay `changes` over `state`, returning the patched value.
///
/// Total: root-path records are defined rather than rejected — an edit of the
/// empty path replaces the whole state, a delete of it yields `Undefined`.
/// A record whose path runs through an incompatible branch falls back to the
/// navigator's zero-value rule instead of failing.
pub fn apply(state: Value, changes: &[ChangeRecord]) -> Value {
    let mut state = state;
    for record in changes {
        state = match record {
            ChangeRecord::Edit { path, value } => match path.split_first() {
                None => value.clone(),
                Some((step, rest)) => set_path(&state, step, rest, value.clone()),
            },
            ChangeRecord::Delete { path } => match path.split_first() {
                None => Value::Undefined,
                Some((step, rest)) => unset_path(&state, step, rest),
            },
        };
    }
    state
}

/// Replay `changes` against the subtree at `path`, writing the patched
/// subtree back in place. An empty path degenerates to plain [`apply`].
pub fn apply_at(state: Value, changes: &[ChangeRecord], path: &[PathStep]) -> Value {
    let Some((step, rest)) = path.split_first() else {
        return apply(state, changes);
    };
    let subtree = get_in(&state, path).cloned().unwrap_or(Value::Undefined);
    let patched = apply(subtree, changes);
    set_path(&state, step, rest, patched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use json_delta_value::path;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn empty_change_set_is_identity() {
        let doc = v(json!({"a": 1}));
        assert_eq!(apply(doc.clone(), &[]), doc);
    }

    #[test]
    fn edits_and_deletes_fold_in_order() {
        let changes = vec![
            ChangeRecord::edit(path!["a", "b"], v(json!(1))),
            ChangeRecord::edit(path!["a", "c"], v(json!(2))),
            ChangeRecord::delete(path!["a", "b"]),
        ];
        assert_eq!(apply(v(json!({})), &changes), v(json!({"a": {"c": 2}})));
    }

    #[test]
    fn root_records_are_defined() {
        let replace = vec![ChangeRecord::edit(path![], v(json!([1])))];
        assert_eq!(apply(v(json!({"x": 1})), &replace), v(json!([1])));
        let remove = vec![ChangeRecord::delete(path![])];
        assert_eq!(apply(v(json!({"x": 1})), &remove), Value::Undefined);
    }

    #[test]
    fn apply_at_patches_a_subtree_in_place() {
        let small_before = v(json!({"name": "ada", "level": 3}));
        let small_after = v(json!({"name": "ada", "level": 4}));
        let changes = diff(&small_before, &small_after);

        let big = v(json!({"users": {"7": {"name": "ada", "level": 3}}, "other": true}));
        assert_eq!(
            apply_at(big, &changes, &path!["users", "7"]),
            v(json!({"users": {"7": {"name": "ada", "level": 4}}, "other": true}))
        );
    }

    #[test]
    fn apply_at_with_empty_path_is_plain_apply() {
        let changes = vec![ChangeRecord::edit(path!["a"], v(json!(1)))];
        assert_eq!(
            apply_at(v(json!({})), &changes, &path![]),
            v(json!({"a": 1}))
        );
    }

    #[test]
    fn apply_at_absent_subtree_starts_from_nothing() {
        let changes = vec![ChangeRecord::edit(path!["a"], v(json!(1)))];
        assert_eq!(
            apply_at(v(json!({})), &changes, &path!["deep", "slot"]),
            v(json!({"deep": {"slot": {"a": 1}}}))
        );
    }
}
