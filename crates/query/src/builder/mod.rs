//! Fluent, typestate-checked construction of filter templates.
//!
//! A [`FilterQuery`] owns the accumulated template and its parameters.
//! [`QueryBuilder`] handles borrow it mutably and change type with every
//! call, so a comparison can only follow a connective (or the start of the
//! query or a group) and a connective can only follow a comparison.

use crate::{
    error::{QueryError, Result},
    operator::Operator,
    renderer::{FilterFunction, filter},
};
use model::core::{params::Params, value::Value};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, marker::PhantomData};
use tracing::{debug, warn};

pub mod open;
pub mod restricted;

// --- Typestate markers ---

/// Accepts a leading comparison, `open()` or `group()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Open;

/// Accepts `and()`, `or()`, `close()` or finalization.
#[derive(Debug, Default, Clone, Copy)]
pub struct Restricted;

/// Template plus parameter values, as returned by [`FilterQuery::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuery {
    pub raw: String,
    pub values: Params,
}

impl RawQuery {
    /// Substitutes the values with the built-in [`filter`].
    pub fn render(&self) -> String {
        filter(&self.raw, Some(&self.values))
    }

    pub fn render_with<F: FilterFunction + ?Sized>(&self, filter: &F) -> String {
        filter.apply(&self.raw, Some(&self.values))
    }
}

/// The accumulator behind every [`QueryBuilder`].
///
/// Calling [`FilterQuery::builder`] again continues the same template: the
/// new fragments are appended to whatever was built before, with no
/// connective in between. Clone the query to branch it instead.
///
/// Parameter names are the path followed by a per-path counter, so two
/// paths can produce the same name: the eleventh `age` and the first
/// `age1` are both `age11`. The later value replaces the earlier one and
/// both placeholders render it.
#[derive(Debug, Default, Clone)]
pub struct FilterQuery {
    raw: String,
    values: Params,
    key_counter: HashMap<String, usize>,
    depth: usize,
    unmatched_close: Option<usize>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder(&mut self) -> QueryBuilder<'_, Open> {
        QueryBuilder::new(self)
    }

    pub fn template(&self) -> &str {
        &self.raw
    }

    pub fn values(&self) -> &Params {
        &self.values
    }

    /// Number of groups opened and not yet closed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a copy of the template and values. Building does not
    /// mutate the query, so it can be called any number of times.
    pub fn build(&self) -> Result<RawQuery> {
        self.check_balanced()?;
        debug!(
            "Built filter query ({} chars, {} params)",
            self.raw.len(),
            self.values.len()
        );
        Ok(RawQuery {
            raw: self.raw.clone(),
            values: self.values.clone(),
        })
    }

    /// Hands the template and values to `filter` and returns its output.
    pub fn build_with<F: FilterFunction + ?Sized>(&self, filter: &F) -> Result<String> {
        self.check_balanced()?;
        debug!(
            "Rendering filter query ({} chars, {} params)",
            self.raw.len(),
            self.values.len()
        );
        Ok(filter.apply(&self.raw, Some(&self.values)))
    }

    fn check_balanced(&self) -> Result<()> {
        if let Some(offset) = self.unmatched_close {
            return Err(QueryError::UnmatchedClose { offset });
        }
        if self.depth != 0 {
            return Err(QueryError::UnclosedGroup { depth: self.depth });
        }
        Ok(())
    }

    fn push(&mut self, fragment: &str) {
        self.raw.push_str(fragment);
    }

    /// Registers `value` under `<path><n>`, where `n` counts the uses of
    /// `path` so far, starting at 1.
    fn save_value(&mut self, path: &str, value: Value) -> String {
        let count = self.key_counter.entry(path.to_string()).or_insert(0);
        *count += 1;
        let name = format!("{path}{count}");
        self.values.insert(name.clone(), value);
        name
    }

    /// Appends `path<op>{:name}` and stores `value` under the fresh name.
    fn expression(&mut self, path: &str, op: Operator, value: Value) {
        let name = self.save_value(path, value);
        self.raw.push_str(&format!("{path}{op}{{:{name}}}"));
    }

    fn open_group(&mut self) {
        self.depth += 1;
        self.push("(");
    }

    fn close_group(&mut self) {
        if self.depth == 0 {
            let offset = self.raw.len();
            warn!("close() without an open group at offset {}", offset);
            self.unmatched_close.get_or_insert(offset);
        } else {
            self.depth -= 1;
        }
        self.push(")");
    }
}

/// A continuation handle over a borrowed [`FilterQuery`].
///
/// `State` is [`Open`] or [`Restricted`] and decides which calls are
/// available next.
#[derive(Debug)]
pub struct QueryBuilder<'q, State> {
    query: &'q mut FilterQuery,
    _state: PhantomData<State>,
}

impl<'q, State> QueryBuilder<'q, State> {
    fn new(query: &'q mut FilterQuery) -> Self {
        Self {
            query,
            _state: PhantomData,
        }
    }

    fn into_state<Next>(self) -> QueryBuilder<'q, Next> {
        QueryBuilder::new(self.query)
    }

    pub fn template(&self) -> &str {
        self.query.template()
    }
}
