//! Parameterized query module.
//!
//! Values, placeholders and the query builders.
//!
//! # Examples
//!
//! ```rust
//! use sqlguard::query::{build_query, PlaceholderStyle};
//!
//! let query = build_query("alice");
//! assert_eq!(query.render(PlaceholderStyle::Numbered), "SELECT * FROM users WHERE name = $1");
//! ```

pub use sqlguard_query::*;
