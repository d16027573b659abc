//! Builder for parameterized filter strings of the form
//! `name={:name1} && (age>{:age1} || tags?~{:tags1})`, plus the
//! substitution function that turns such a template into the final filter.
//!
//! ```
//! use query::{FilterQuery, filter};
//!
//! let mut query = FilterQuery::new();
//! let rendered = query
//!     .builder()
//!     .equal("name", "John")
//!     .and()
//!     .group(|q| q.not_equal("age", 20).or().not_equal("age", 30))
//!     .build_with(&filter)
//!     .unwrap();
//!
//! assert_eq!(rendered, "name='John' && (age!=20 || age!=30)");
//! ```

pub mod builder;
pub mod error;
pub mod macros;
pub mod operator;
pub mod path;
pub mod renderer;

pub use builder::{FilterQuery, Open, QueryBuilder, RawQuery, Restricted};
pub use error::QueryError;
pub use model::core::{params::Params, value::Value};
pub use operator::Operator;
pub use renderer::{FilterFunction, filter, literal};
