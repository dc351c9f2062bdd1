//! # sqlguard-query
//!
//! Injection-safe query construction.
//!
//! A [`ParameterizedQuery`] pairs a SQL template containing positional
//! placeholders with the ordered values bound to them. Builders such as
//! [`build_query`] take untrusted input and only ever place it in the
//! parameter list: the template is a constant of the querying intent, so no
//! input can change the statement's syntax.
//!
//! Executing the query is left to a database driver, which receives the
//! template and binds the parameters positionally.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlguard_query::prelude::*;
//!
//! let query = build_query("alice");
//! assert_eq!(query.template(), "SELECT * FROM users WHERE name = ?");
//! assert_eq!(query.parameters().len(), 1);
//!
//! // Hand the pair to a driver
//! let (sql, values) = query.into_parts();
//! # let _ = (sql, values);
//! ```
//!
//! ## Placeholders
//!
//! | Backend | Placeholders |
//! |---------|-------------|
//! | MySQL / SQLite | `?, ?, ...` |
//! | PostgreSQL | `$1, $2, ...` via [`ParameterizedQuery::render`] |
//!
//! ## Modules
//!
//! - [`value`]: [`Value`], [`IntoValue`] and [`Values`]
//! - [`placeholder`]: placeholder counting and rewriting
//! - [`query`]: [`ParameterizedQuery`] and [`build_query`]
//! - [`error`]: [`QueryError`]

pub mod error;
pub mod placeholder;
pub mod query;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
	pub use crate::error::{QueryError, QueryResult};
	pub use crate::placeholder::PlaceholderStyle;
	pub use crate::query::{FIND_USER_BY_NAME, ParameterizedQuery, build_query};
	pub use crate::value::{IntoValue, Value, Values};
}

pub use prelude::*;
