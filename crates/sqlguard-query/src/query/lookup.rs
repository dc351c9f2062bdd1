//! User lookup by name.

use super::ParameterizedQuery;
use crate::value::IntoValue;

/// Template used by [`build_query`].
pub const FIND_USER_BY_NAME: &str = "SELECT * FROM users WHERE name = ?";

/// Build the user lookup query for `input`.
///
/// The returned template is always [`FIND_USER_BY_NAME`]. `input` only ever
/// becomes the single bound parameter, whatever it contains: quotes,
/// semicolons and comment markers never reach the SQL text. A `None` input is
/// bound as `NULL` rather than an empty string.
///
/// # Example
///
/// ```rust
/// use sqlguard_query::{build_query, FIND_USER_BY_NAME, IntoValue};
///
/// let query = build_query("'; DROP TABLE users; --");
/// assert_eq!(query.template(), FIND_USER_BY_NAME);
/// assert_eq!(query.parameters()[0], "'; DROP TABLE users; --".into_value());
/// ```
pub fn build_query(input: impl IntoValue) -> ParameterizedQuery {
	let value = input.into_value();
	tracing::debug!(
		template = FIND_USER_BY_NAME,
		parameter_type = value.type_name(),
		is_null = value.is_null(),
		"Built user lookup query"
	);
	ParameterizedQuery::single(FIND_USER_BY_NAME, value)
}
