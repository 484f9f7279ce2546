//! Path types: typed steps into nested values.

use std::fmt;

/// A single step in a [`Path`].
///
/// `Index` selects into a sequence, `Key` into a mapping. The distinction
/// matters: when an update has to create a missing intermediate container,
/// the kind of the next step decides whether it creates an empty array or an
/// empty object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

/// An ordered sequence of steps addressing a location in nested data.
/// The empty path addresses the value itself.
pub type Path = Vec<PathStep>;

impl From<&str> for PathStep {
    fn from(key: &str) -> PathStep {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> PathStep {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> PathStep {
        PathStep::Index(index)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Build a [`Path`] from string and integer literals.
///
/// ```
/// use json_delta_value::{path, PathStep};
///
/// let p = path!["users", 0, "name"];
/// assert_eq!(p[1], PathStep::Index(0));
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($step:expr),+ $(,)?) => {
        vec![$($crate::PathStep::from($step)),+]
    };
}
