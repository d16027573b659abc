//! Comparison operators of the filter grammar.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Like,
    NotLike,

    // At least one element of a multi-valued field matches.
    AnyEqual,
    AnyNotEqual,
    AnyGreaterThan,
    AnyGreaterThanOrEqual,
    AnyLessThan,
    AnyLessThanOrEqual,
    AnyLike,
    AnyNotLike,
}

impl Operator {
    pub const ALL: [Operator; 16] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::Like,
        Operator::NotLike,
        Operator::AnyEqual,
        Operator::AnyNotEqual,
        Operator::AnyGreaterThan,
        Operator::AnyGreaterThanOrEqual,
        Operator::AnyLessThan,
        Operator::AnyLessThanOrEqual,
        Operator::AnyLike,
        Operator::AnyNotLike,
    ];

    /// The literal token written between the field path and the placeholder.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Like => "~",
            Operator::NotLike => "!~",
            Operator::AnyEqual => "?=",
            Operator::AnyNotEqual => "?!=",
            Operator::AnyGreaterThan => "?>",
            Operator::AnyGreaterThanOrEqual => "?>=",
            Operator::AnyLessThan => "?<",
            Operator::AnyLessThanOrEqual => "?<=",
            Operator::AnyLike => "?~",
            Operator::AnyNotLike => "?!~",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "notEqual",
            Operator::GreaterThan => "greaterThan",
            Operator::GreaterThanOrEqual => "greaterThanOrEqual",
            Operator::LessThan => "lessThan",
            Operator::LessThanOrEqual => "lessThanOrEqual",
            Operator::Like => "like",
            Operator::NotLike => "notLike",
            Operator::AnyEqual => "anyEqual",
            Operator::AnyNotEqual => "anyNotEqual",
            Operator::AnyGreaterThan => "anyGreaterThan",
            Operator::AnyGreaterThanOrEqual => "anyGreaterThanOrEqual",
            Operator::AnyLessThan => "anyLessThan",
            Operator::AnyLessThanOrEqual => "anyLessThanOrEqual",
            Operator::AnyLike => "anyLike",
            Operator::AnyNotLike => "anyNotLike",
        }
    }

    pub fn is_any(self) -> bool {
        self.token().starts_with('?')
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operator: '{0}'")]
pub struct UnknownOperator(pub String);

/// Accepts either the method name (`anyLike`) or the token (`?~`).
impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s || op.token() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
