//! Helpers for composing field paths.
//!
//! The builder treats paths as opaque strings; these only save callers from
//! formatting them by hand.

use std::fmt;

/// Suffix applied to the last segment of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Case-insensitive comparison of a text field.
    Lower,
    /// Compare every element of a multi-valued field.
    Each,
    /// Compare the number of elements of a multi-valued field.
    Length,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Lower => write!(f, ":lower"),
            Modifier::Each => write!(f, ":each"),
            Modifier::Length => write!(f, ":length"),
        }
    }
}

/// `with_modifier("tags", Modifier::Length)` -> `tags:length`
pub fn with_modifier(path: &str, modifier: Modifier) -> String {
    format!("{path}{modifier}")
}

/// `join(["user", "name"])` -> `user.name`
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(".")
}
