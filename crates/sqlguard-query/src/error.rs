//! Query construction errors

/// Errors returned by [`ParameterizedQuery::new`](crate::ParameterizedQuery::new).
///
/// The lookup builder never produces these: its template is fixed and always
/// paired with exactly one parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
	/// The template has no SQL text
	#[error("Query template must not be empty")]
	EmptyTemplate,

	/// Placeholder count and parameter count disagree
	#[error("Template has {placeholders} placeholder(s) but {parameters} parameter(s) were supplied")]
	PlaceholderMismatch {
		placeholders: usize,
		parameters: usize,
	},
}

/// Result alias for query construction
pub type QueryResult<T> = Result<T, QueryError>;
