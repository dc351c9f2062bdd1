//! # sqlguard
//!
//! Injection-safe parameterized queries and database credentials that never
//! live in source code.
//!
//! sqlguard is a facade over two small crates:
//!
//! - [`query`] (feature `query`): a [`ParameterizedQuery`](query::ParameterizedQuery)
//!   pairs a fixed SQL template with the values bound to its placeholders.
//!   Untrusted input only ever becomes a bound value.
//! - [`conf`] (feature `conf`): secrets are read from the process
//!   environment (or an injected source) and are empty when unset, with no
//!   hardcoded fallback.
//!
//! Executing queries is left to a database driver of your choice.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `query` - query values and builders
//! - `conf` - secret access and database credentials
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlguard::prelude::*;
//!
//! let credentials = DatabaseCredentials::from_env();
//! let query = build_query("'; DROP TABLE users; --");
//!
//! assert_eq!(query.template(), "SELECT * FROM users WHERE name = ?");
//! assert_eq!(query.parameter_count(), 1);
//! # let _ = credentials;
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "query")]
pub mod query;

/// Prelude module for convenient imports.
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::conf::{DatabaseCredentials, SecretAccessor, SecretSource, get_secret};
	#[cfg(feature = "query")]
	pub use crate::query::{
		FIND_USER_BY_NAME, IntoValue, ParameterizedQuery, PlaceholderStyle, QueryError, Value,
		Values, build_query,
	};
}
