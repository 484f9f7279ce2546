//! Change records and the error surface of the path operations.

use json_delta_value::{Path, PathStep, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must contain at least one step")]
    EmptyPath,
}

/// One instruction in a change-set.
///
/// `Edit` covers create, replace, and primitive overwrite in one tag; the
/// applier cannot tell them apart and does not need to. `Delete` removes a
/// mapping key, or leaves a hole in a sequence (see `dissoc_in`).
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeRecord {
    Edit { path: Path, value: Value },
    Delete { path: Path },
}

/// An ordered sequence of change records. Replay is sequential, so order is
/// part of the format.
pub type ChangeSet = Vec<ChangeRecord>;

impl ChangeRecord {
    pub fn edit(path: Path, value: Value) -> ChangeRecord {
        ChangeRecord::Edit { path, value }
    }

    pub fn delete(path: Path) -> ChangeRecord {
        ChangeRecord::Delete { path }
    }

    pub fn path(&self) -> &[PathStep] {
        match self {
            ChangeRecord::Edit { path, .. } => path,
            ChangeRecord::Delete { path } => path,
        }
    }
}
