//! JSON codec for change records.
//!
//! A record encodes as a 2- or 3-element tuple: `["e", path, value]` for an
//! edit, `["d", path]` for a delete. Path steps encode as JSON strings
//! (mapping keys) or non-negative integers (sequence indices). The format is
//! what existing consumers of the change-set stream expect, so it is fixed.

use serde_json::{json, Value as Json};
use thiserror::Error;

use json_delta_value::{Path, PathStep, ToJsonError, Value};

use crate::types::{ChangeRecord, ChangeSet};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("change record must be a 2- or 3-element array")]
    InvalidRecord,
    #[error("unknown change tag `{0}`")]
    InvalidTag(String),
    #[error("path step must be a string or a non-negative integer")]
    InvalidStep,
    #[error(transparent)]
    Value(#[from] ToJsonError),
}

fn encode_path(path: &[PathStep]) -> Json {
    Json::Array(
        path.iter()
            .map(|step| match step {
                PathStep::Key(key) => Json::String(key.clone()),
                PathStep::Index(index) => Json::from(*index as u64),
            })
            .collect(),
    )
}

fn decode_path(json: &Json) -> Result<Path, CodecError> {
    let steps = json.as_array().ok_or(CodecError::InvalidRecord)?;
    steps
        .iter()
        .map(|step| match step {
            Json::String(key) => Ok(PathStep::Key(key.clone())),
            Json::Number(n) => n
                .as_u64()
                .map(|i| PathStep::Index(i as usize))
                .ok_or(CodecError::InvalidStep),
            _ => Err(CodecError::InvalidStep),
        })
        .collect()
}

/// Encode a single change record.
///
/// Fails when an edit carries a value with no JSON representation
/// (`Undefined`, a date, a pattern, or a non-finite number).
pub fn encode_change(record: &ChangeRecord) -> Result<Json, CodecError> {
    match record {
        ChangeRecord::Edit { path, value } => {
            Ok(json!(["e", encode_path(path), value.to_json()?]))
        }
        ChangeRecord::Delete { path } => Ok(json!(["d", encode_path(path)])),
    }
}

/// Decode a single change record, validating the tuple shape.
pub fn decode_change(json: &Json) -> Result<ChangeRecord, CodecError> {
    let items = json.as_array().ok_or(CodecError::InvalidRecord)?;
    let tag = items
        .first()
        .and_then(Json::as_str)
        .ok_or(CodecError::InvalidRecord)?;
    match (tag, items.len()) {
        ("e", 3) => Ok(ChangeRecord::edit(
            decode_path(&items[1])?,
            Value::from(&items[2]),
        )),
        ("d", 2) => Ok(ChangeRecord::delete(decode_path(&items[1])?)),
        ("e", _) | ("d", _) => Err(CodecError::InvalidRecord),
        _ => Err(CodecError::InvalidTag(tag.to_string())),
    }
}

/// Encode an ordered change-set as a JSON array.
pub fn encode_change_set(changes: &[ChangeRecord]) -> Result<Json, CodecError> {
    changes
        .iter()
        .map(encode_change)
        .collect::<Result<Vec<Json>, CodecError>>()
        .map(Json::Array)
}

/// Decode a JSON array back into a change-set.
pub fn decode_change_set(json: &Json) -> Result<ChangeSet, CodecError> {
    let items = json.as_array().ok_or(CodecError::InvalidRecord)?;
    items.iter().map(decode_change).collect()
}
