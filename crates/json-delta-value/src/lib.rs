//! Value model for the json-delta workspace.
//!
//! Provides the [`Value`] tree (JSON shapes plus dates, patterns, and an
//! explicit `Undefined`), the [`Kind`] classifier the differ compares with,
//! typed [`Path`] steps, and conversions to and from `serde_json::Value`.
//!
//! # Example
//!
//! ```
//! use json_delta_value::{path, Kind, PathStep, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"users": [{"name": "ada"}]}));
//! assert_eq!(value.kind(), Kind::Object);
//!
//! let p = path!["users", 0, "name"];
//! assert_eq!(p[0], PathStep::Key("users".to_string()));
//! assert_eq!(p[1], PathStep::Index(0));
//! ```

mod convert;
mod path;
mod value;

pub use convert::ToJsonError;
pub use path::{Path, PathStep};
pub use value::{Kind, Map, Value};
