//! The parameterized query value object.

use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::placeholder::{PlaceholderStyle, count_placeholders, rewrite_placeholders};
use crate::value::{IntoValue, Values};

/// A SQL template paired with the values bound to its placeholders.
///
/// The template is fixed when the query is built and is never derived from
/// parameter contents. Parameters are owned privately: [`parameters`] hands
/// out a fresh copy, so nothing a caller does to that copy reaches the query.
///
/// `Debug` prints the template and the number of parameters, never their
/// contents.
///
/// [`parameters`]: ParameterizedQuery::parameters
///
/// # Example
///
/// ```rust
/// use sqlguard_query::{ParameterizedQuery, IntoValue};
///
/// let query = ParameterizedQuery::new(
///     "SELECT * FROM users WHERE name = ? AND active = ?",
///     vec!["alice".into_value(), true.into_value()],
/// )
/// .unwrap();
///
/// assert_eq!(query.parameter_count(), 2);
/// ```
///
/// Templates are `&'static str`, so one assembled at runtime does not compile:
///
/// ```compile_fail
/// use sqlguard_query::{ParameterizedQuery, IntoValue};
///
/// let name = String::from("alice' OR '1'='1");
/// let template = format!("SELECT * FROM users WHERE name = '{}' AND id = ?", name);
/// let _ = ParameterizedQuery::new(&template, vec![1i32.into_value()]);
/// ```
#[derive(Clone, PartialEq)]
pub struct ParameterizedQuery {
	template: &'static str,
	parameters: Values,
}

impl ParameterizedQuery {
	/// Create a query, checking that every placeholder has a parameter.
	///
	/// The template must be a string literal or constant. User input goes in
	/// `parameters`, never in the SQL text.
	///
	/// # Errors
	///
	/// - [`QueryError::EmptyTemplate`] if `template` is blank
	/// - [`QueryError::PlaceholderMismatch`] if the number of `?` markers in
	///   plain SQL text differs from the number of parameters
	pub fn new(template: &'static str, parameters: impl Into<Values>) -> QueryResult<Self> {
		let parameters = parameters.into();

		if template.trim().is_empty() {
			return Err(QueryError::EmptyTemplate);
		}

		let placeholders = count_placeholders(template);
		if placeholders != parameters.len() {
			return Err(QueryError::PlaceholderMismatch {
				placeholders,
				parameters: parameters.len(),
			});
		}

		Ok(Self {
			template,
			parameters,
		})
	}

	/// Build a single-parameter query from a template known at compile time.
	pub(crate) fn single(template: &'static str, value: impl IntoValue) -> Self {
		debug_assert_eq!(count_placeholders(template), 1);
		Self {
			template,
			parameters: Values::from(vec![value.into_value()]),
		}
	}

	/// The SQL template with `?` placeholders.
	#[must_use]
	pub fn template(&self) -> &'static str {
		self.template
	}

	/// A copy of the bind parameters, in placeholder order.
	///
	/// Each call allocates a new list.
	#[must_use]
	pub fn parameters(&self) -> Values {
		self.parameters.clone()
	}

	/// Number of bind parameters.
	#[must_use]
	pub fn parameter_count(&self) -> usize {
		self.parameters.len()
	}

	/// Render the template for a backend's placeholder style.
	///
	/// ```rust
	/// use sqlguard_query::{build_query, PlaceholderStyle};
	///
	/// let query = build_query("alice");
	/// assert_eq!(
	///     query.render(PlaceholderStyle::Numbered),
	///     "SELECT * FROM users WHERE name = $1"
	/// );
	/// ```
	#[must_use]
	pub fn render(&self, style: PlaceholderStyle) -> String {
		rewrite_placeholders(self.template, style)
	}

	/// Consume the query, returning the `(sql, values)` pair a driver binds.
	#[must_use]
	pub fn into_parts(self) -> (String, Values) {
		(self.template.to_string(), self.parameters)
	}
}

impl fmt::Debug for ParameterizedQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ParameterizedQuery")
			.field("template", &self.template)
			.field("parameters", &format_args!("<{} bound>", self.parameters.len()))
			.finish()
	}
}
