//! Value types for bind parameters.
//!
//! - [`Value`]: a single typed, nullable SQL value
//! - [`IntoValue`]: conversion from Rust types (and their `Option`s)
//! - [`Values`]: the ordered parameter list of a query

mod core;


pub use self::core::Value;

use std::ops::Index;

/// Conversion into a bindable [`Value`].
///
/// Implemented for the primitive types a query accepts and for `Option`s of
/// them. `None` becomes the typed null of the corresponding variant.
///
/// ```rust
/// use sqlguard_query::{IntoValue, Value};
///
/// assert_eq!("alice".into_value(), Value::String(Some(Box::new("alice".to_string()))));
/// assert_eq!(Option::<&str>::None.into_value(), Value::String(None));
/// ```
pub trait IntoValue {
	/// Convert `self` into a [`Value`].
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! impl_into_value {
	($ty:ty, $variant:ident) => {
		impl IntoValue for $ty {
			fn into_value(self) -> Value {
				Value::$variant(Some(self))
			}
		}

		impl IntoValue for Option<$ty> {
			fn into_value(self) -> Value {
				Value::$variant(self)
			}
		}

		impl From<$ty> for Value {
			fn from(v: $ty) -> Self {
				v.into_value()
			}
		}
	};
}

impl_into_value!(bool, Bool);
impl_into_value!(i32, Int);
impl_into_value!(i64, BigInt);
impl_into_value!(f64, Double);
impl_into_value!(char, Char);

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self)))
	}
}

impl IntoValue for Option<String> {
	fn into_value(self) -> Value {
		Value::String(self.map(Box::new))
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::String(Some(Box::new(self.to_string())))
	}
}

impl IntoValue for Option<&str> {
	fn into_value(self) -> Value {
		Value::String(self.map(|s| Box::new(s.to_string())))
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self)))
	}
}

impl IntoValue for Option<Vec<u8>> {
	fn into_value(self) -> Value {
		Value::Bytes(self.map(Box::new))
	}
}

impl IntoValue for &[u8] {
	fn into_value(self) -> Value {
		Value::Bytes(Some(Box::new(self.to_vec())))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		v.into_value()
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		v.into_value()
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		v.into_value()
	}
}

/// Ordered list of bind parameters.
///
/// The position of a value is the position of the placeholder it binds to.
/// Build one with [`push`](Values::push), `From<Vec<Value>>` or `collect()`;
/// the backing vector is not reachable from outside:
///
/// ```compile_fail
/// use sqlguard_query::Values;
///
/// let mut values = Values::new();
/// values.0.push(sqlguard_query::Value::String(None));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(Vec<Value>);

impl Values {
	/// Create an empty parameter list.
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Number of parameters.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if there are no parameters.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate over the parameters in binding order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	/// Mutable access to a parameter.
	///
	/// Only meaningful on a copy obtained from a query; the query itself
	/// never hands out its own storage.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
		self.0.get_mut(index)
	}

	/// Append a parameter.
	pub fn push(&mut self, value: impl IntoValue) {
		self.0.push(value.into_value());
	}

	/// Consume the list, returning the underlying vector.
	#[must_use]
	pub fn into_inner(self) -> Vec<Value> {
		self.0
	}
}

impl Index<usize> for Values {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

impl From<Vec<Value>> for Values {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl FromIterator<Value> for Values {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
