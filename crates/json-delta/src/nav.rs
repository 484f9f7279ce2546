//! Path navigator: pure reads, sets, and deletes at a key path.
//!
//! Every operation returns a new top-level value and shares unchanged
//! branches with its input; nothing is ever written through a caller's value.

use json_delta_value::{Map, PathStep, Value};

use crate::types::PathError;

/// Read the value at `path`. The empty path returns the subject itself.
///
/// Returns `None` on a missing key, an out-of-range index, an `Undefined`
/// hole, or a step into a non-container. Absence is the only thing that
/// short-circuits: `false`, `0`, `""`, and `Null` leaves are returned.
pub fn get_in<'a>(subject: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = subject;
    for step in path {
        current = child_of(current, step)?;
        if current.is_undefined() {
            return None;
        }
    }
    Some(current)
}

/// Set `value` at `path`, creating missing intermediate containers.
///
/// The kind of a freshly created container follows the next step: an `Index`
/// step creates an empty array, a `Key` step an empty object. An existing
/// non-container in the middle of the path is silently overwritten by that
/// zero-value. Fails only on an empty path.
pub fn assoc_in(subject: &Value, path: &[PathStep], value: Value) -> Result<Value, PathError> {
    let (step, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
    Ok(set_path(subject, step, rest, value))
}

/// Delete the value at `path`.
///
/// Deleting an absent key is a no-op on a structural copy. Missing
/// intermediate containers along the path are created, like `assoc_in` does.
/// Fails only on an empty path.
pub fn dissoc_in(subject: &Value, path: &[PathStep]) -> Result<Value, PathError> {
    let (step, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
    Ok(unset_path(subject, step, rest))
}

/// Replace the value at `path` with `f` of the current value (`None` when
/// absent). Reads via [`get_in`], writes via [`assoc_in`].
pub fn update_in<F>(subject: &Value, path: &[PathStep], f: F) -> Result<Value, PathError>
where
    F: FnOnce(Option<&Value>) -> Value,
{
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let next = f(get_in(subject, path));
    assoc_in(subject, path, next)
}

/// Number of keys in a mapping, number of non-hole slots in a sequence,
/// and 0 for everything else.
pub fn count(subject: &Value) -> usize {
    match subject {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.iter().filter(|v| !v.is_undefined()).count(),
        _ => 0,
    }
}

/// The empty container matching a step kind.
fn zero_value(step: &PathStep) -> Value {
    match step {
        PathStep::Index(_) => Value::array(Vec::new()),
        PathStep::Key(_) => Value::object(Map::new()),
    }
}

fn step_key(step: &PathStep) -> String {
    match step {
        PathStep::Key(key) => key.clone(),
        PathStep::Index(index) => index.to_string(),
    }
}

fn child_of<'a>(subject: &'a Value, step: &PathStep) -> Option<&'a Value> {
    match (subject, step) {
        (Value::Array(items), PathStep::Index(i)) => items.get(*i),
        (Value::Array(items), PathStep::Key(k)) => {
            k.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        (Value::Object(map), PathStep::Key(k)) => map.get(k.as_str()),
        (Value::Object(map), PathStep::Index(i)) => map.get(i.to_string().as_str()),
        _ => None,
    }
}

pub(crate) fn set_path(subject: &Value, step: &PathStep, rest: &[PathStep], value: Value) -> Value {
    let value = match rest.split_first() {
        None => value,
        Some((next, tail)) => {
            let base = match child_of(subject, step) {
                Some(child) if child.is_container() => child.clone(),
                _ => zero_value(next),
            };
            set_path(&base, next, tail, value)
        }
    };
    set_step(subject, step, value)
}

pub(crate) fn unset_path(subject: &Value, step: &PathStep, rest: &[PathStep]) -> Value {
    match rest.split_first() {
        None => unset_step(subject, step),
        Some((next, tail)) => {
            let base = match child_of(subject, step) {
                Some(child) if child.is_container() => child.clone(),
                _ => zero_value(next),
            };
            set_step(subject, step, unset_path(&base, next, tail))
        }
    }
}

fn set_step(subject: &Value, step: &PathStep, value: Value) -> Value {
    match (subject, step) {
        (Value::Array(items), PathStep::Index(i)) => {
            let mut items = items.as_ref().clone();
            if *i >= items.len() {
                items.resize(*i + 1, Value::Undefined);
            }
            items[*i] = value;
            Value::array(items)
        }
        // A string key turns the sequence into a mapping keyed by the
        // decimal indices, which then gains the new key.
        (Value::Array(items), PathStep::Key(k)) => {
            let mut map: Map = items
                .iter()
                .enumerate()
                .filter(|(_, v)| !v.is_undefined())
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect();
            map.insert(k.clone(), value);
            Value::object(map)
        }
        (Value::Object(map), step) => {
            let mut map = map.as_ref().clone();
            map.insert(step_key(step), value);
            Value::object(map)
        }
        // Non-container subjects give way to the zero-value for the step.
        (_, PathStep::Index(i)) => {
            let mut items = vec![Value::Undefined; *i];
            items.push(value);
            Value::array(items)
        }
        (_, PathStep::Key(k)) => {
            let mut map = Map::new();
            map.insert(k.clone(), value);
            Value::object(map)
        }
    }
}

fn unset_step(subject: &Value, step: &PathStep) -> Value {
    match (subject, step) {
        // Keyed delete: the slot becomes a hole, then trailing holes are
        // truncated. Deleting the last index therefore shortens the array;
        // deleting an earlier index does not shift later elements.
        (Value::Array(items), PathStep::Index(i)) => {
            let mut items = items.as_ref().clone();
            if *i < items.len() {
                items[*i] = Value::Undefined;
                while items.last().is_some_and(Value::is_undefined) {
                    items.pop();
                }
            }
            Value::array(items)
        }
        (Value::Array(items), PathStep::Key(k)) => match k.parse::<usize>() {
            Ok(i) => unset_step(subject, &PathStep::Index(i)),
            Err(_) => Value::array(items.as_ref().clone()),
        },
        (Value::Object(map), step) => {
            let mut map = map.as_ref().clone();
            map.shift_remove(step_key(step).as_str());
            Value::object(map)
        }
        // Nothing to delete from a non-container; an empty mapping results.
        _ => Value::object(Map::new()),
    }
}
