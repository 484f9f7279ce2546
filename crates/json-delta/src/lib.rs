//! Immutable path-based updates over nested values, plus a structural
//! differ and patch replay built on the same path addressing.
//!
//! Every operation returns a new top-level value and shares unchanged
//! branches with its input, so callers can keep old snapshots around for
//! free — which is also what lets [`diff`] skip shared branches in O(1)
//! instead of walking them.
//!
//! # Example
//!
//! ```
//! use json_delta::{apply, assoc_in, diff, path, Value};
//! use serde_json::json;
//!
//! let before = Value::from(json!({"user": {"name": "ada", "level": 3}}));
//! let after = assoc_in(&before, &path!["user", "level"], Value::from(4))?;
//!
//! let changes = diff(&before, &after);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(apply(before, &changes), after);
//! # Ok::<(), json_delta::PathError>(())
//! ```

pub mod codec;

mod apply;
mod diff;
mod nav;
mod types;

pub use apply::{apply, apply_at};
pub use diff::diff;
pub use nav::{assoc_in, count, dissoc_in, get_in, update_in};
pub use nav::{assoc_in as set, dissoc_in as unset};
pub use types::{ChangeRecord, ChangeSet, PathError};

pub use json_delta_value::{path, Kind, Map, Path, PathStep, ToJsonError, Value};
