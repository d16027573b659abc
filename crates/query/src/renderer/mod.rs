//! Placeholder substitution for filter templates.

use model::core::params::Params;

pub mod literal;

pub use literal::literal;

/// Anything that turns a template and its parameters into a final filter
/// string, e.g. [`filter`] or a backend client's native renderer.
pub trait FilterFunction {
    fn apply(&self, raw: &str, params: Option<&Params>) -> String;
}

impl<F> FilterFunction for F
where
    F: Fn(&str, Option<&Params>) -> String,
{
    fn apply(&self, raw: &str, params: Option<&Params>) -> String {
        self(raw, params)
    }
}

/// Replaces every `{:key}` in `raw` with the literal form of `params[key]`.
///
/// Keys are substituted one at a time in insertion order, each replacing
/// all of its occurrences in the current text. A rendered value that itself
/// contains `{:other}` is therefore substituted again if `other` comes later.
pub fn filter(raw: &str, params: Option<&Params>) -> String {
    let Some(params) = params else {
        return raw.to_string();
    };

    let mut out = raw.to_string();
    for (key, value) in params {
        let placeholder = format!("{{:{key}}}");
        out = out.replace(&placeholder, &literal(value));
    }
    out
}
