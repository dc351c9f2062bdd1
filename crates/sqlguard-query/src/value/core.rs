//! Core Value enum definition.

/// A value bound to a placeholder at execution time.
///
/// Every variant wraps an `Option<T>`. `None` is a typed SQL `NULL`, so an
/// absent input stays absent instead of collapsing into an empty string.
///
/// ## Example
///
/// ```rust
/// use sqlguard_query::Value;
///
/// let name = Value::String(Some(Box::new("alice".to_string())));
/// let missing = Value::String(None);
///
/// assert!(!name.is_null());
/// assert!(missing.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	// -------------------------------------------------------------------------
	// Primitive types (inline, not boxed)
	// -------------------------------------------------------------------------
	/// Boolean value
	Bool(Option<bool>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),

	// -------------------------------------------------------------------------
	// Heap-allocated types (boxed for size optimization)
	// -------------------------------------------------------------------------
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlguard_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
		}
	}

	/// Name of the SQL type family this value binds as.
	///
	/// Used in log fields in place of the value itself.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::BigInt(_) => "bigint",
			Self::Double(_) => "double",
			Self::Char(_) => "char",
			Self::String(_) => "string",
			Self::Bytes(_) => "bytes",
		}
	}

	/// Borrow the string payload, if this is a non-null string.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(Some(s)) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Self::String(None)
	}
}
