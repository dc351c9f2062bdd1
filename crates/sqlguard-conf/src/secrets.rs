//! Secret access
//!
//! Credentials are read from a [`SecretSource`] at runtime, never from
//! literals in code. A missing secret is an empty string: callers decide
//! what absence means, and nothing here substitutes a default credential.

pub mod env;
pub mod memory;

pub use env::{EnvError, EnvSecretSource};
pub use memory::MemorySecretSource;

use secrecy::SecretString;
use std::sync::Arc;

/// A read-only place secrets come from.
///
/// The process environment is the production source; tests and embedding
/// applications substitute their own.
pub trait SecretSource: Send + Sync {
	/// Look up a secret by name, returning `None` when it is absent
	fn lookup(&self, name: &str) -> Option<String>;

	/// Short source name used in log fields
	fn name(&self) -> &str;
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
	fn lookup(&self, name: &str) -> Option<String> {
		(**self).lookup(name)
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}

impl<S: SecretSource + ?Sized> SecretSource for Arc<S> {
	fn lookup(&self, name: &str) -> Option<String> {
		(**self).lookup(name)
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
	fn lookup(&self, name: &str) -> Option<String> {
		(**self).lookup(name)
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}

/// Reads named secrets from a [`SecretSource`].
///
/// # Example
///
/// ```rust
/// use sqlguard_conf::secrets::{MemorySecretSource, SecretAccessor};
///
/// let accessor = SecretAccessor::new(
///     MemorySecretSource::new().with_secret("DB_PASSWORD", "from-vault"),
/// );
///
/// assert_eq!(accessor.get_secret("DB_PASSWORD"), "from-vault");
/// assert_eq!(accessor.get_secret("API_TOKEN"), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecretAccessor<S = EnvSecretSource> {
	source: S,
}

impl SecretAccessor<EnvSecretSource> {
	/// Accessor over the process environment, without a prefix
	pub fn from_env() -> Self {
		Self::new(EnvSecretSource::without_prefix())
	}
}

impl<S: SecretSource> SecretAccessor<S> {
	/// Wrap a source
	pub fn new(source: S) -> Self {
		Self { source }
	}

	/// The underlying source
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Read a secret, returning an empty string when it is absent.
	///
	/// Never fails. The value is not logged.
	pub fn get_secret(&self, name: &str) -> String {
		let value = self.source.lookup(name);
		tracing::debug!(
			source = self.source.name(),
			secret = name,
			found = value.is_some(),
			"Secret lookup"
		);
		value.unwrap_or_default()
	}

	/// Read a secret wrapped in [`SecretString`], which redacts itself in
	/// `Debug` output and zeroizes on drop.
	pub fn get_secret_string(&self, name: &str) -> SecretString {
		SecretString::from(self.get_secret(name))
	}

	/// Returns `true` if the source has a value for `name`
	pub fn contains(&self, name: &str) -> bool {
		self.source.lookup(name).is_some()
	}
}

/// Read a secret from the process environment.
///
/// Returns the variable's value, or an empty string when it is unset.
///
/// ```rust
/// use sqlguard_conf::get_secret;
///
/// let password = get_secret("SQLGUARD_DOC_UNSET_SECRET");
/// assert_eq!(password, "");
/// ```
pub fn get_secret(name: &str) -> String {
	SecretAccessor::from_env().get_secret(name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::TestEnv;
	use pretty_assertions::assert_eq;
	use rstest::{fixture, rstest};
	use secrecy::ExposeSecret;
	use serial_test::serial;

	#[fixture]
	fn accessor() -> SecretAccessor<MemorySecretSource> {
		SecretAccessor::new(
			MemorySecretSource::new()
				.with_secret("DB_USER", "app")
				.with_secret("DB_PASSWORD", "from-vault"),
		)
	}

	#[rstest]
	fn test_get_secret_found(accessor: SecretAccessor<MemorySecretSource>) {
		assert_eq!(accessor.get_secret("DB_PASSWORD"), "from-vault");
		assert!(accessor.contains("DB_USER"));
	}

	#[rstest]
	fn test_get_secret_missing_is_empty(accessor: SecretAccessor<MemorySecretSource>) {
		assert_eq!(accessor.get_secret("API_TOKEN"), "");
		assert!(!accessor.contains("API_TOKEN"));
	}

	#[rstest]
	fn test_get_secret_string_redacts(accessor: SecretAccessor<MemorySecretSource>) {
		let secret = accessor.get_secret_string("DB_PASSWORD");

		assert_eq!(secret.expose_secret(), "from-vault");
		assert!(!format!("{:?}", secret).contains("from-vault"));
	}

	#[rstest]
	fn test_shared_source_through_arc() {
		let source = Arc::new(MemorySecretSource::new());
		let accessor = SecretAccessor::new(Arc::clone(&source));

		assert_eq!(accessor.get_secret("DB_PASSWORD"), "");
		source.insert("DB_PASSWORD", "later");
		assert_eq!(accessor.get_secret("DB_PASSWORD"), "later");
	}

	#[rstest]
	fn test_boxed_dyn_source() {
		let source: Box<dyn SecretSource> =
			Box::new(MemorySecretSource::new().with_secret("K", "v"));
		let accessor = SecretAccessor::new(source);

		assert_eq!(accessor.get_secret("K"), "v");
		assert_eq!(accessor.source().name(), "memory");
	}

	#[rstest]
	#[serial]
	fn test_get_secret_from_env_unset_is_empty() {
		let mut test_env = TestEnv::new();
		test_env.remove_var("DB_PASSWORD");

		assert_eq!(get_secret("DB_PASSWORD"), "");
	}

	#[rstest]
	#[serial]
	fn test_get_secret_from_env_set() {
		let mut test_env = TestEnv::new();
		test_env.set_var("DB_PASSWORD", "env-supplied");

		assert_eq!(get_secret("DB_PASSWORD"), "env-supplied");
	}

	#[rstest]
	#[serial]
	fn test_get_secret_empty_value_is_empty() {
		let mut test_env = TestEnv::new();
		test_env.set_var("DB_PASSWORD", "");

		let accessor = SecretAccessor::from_env();

		assert_eq!(accessor.get_secret("DB_PASSWORD"), "");
		assert!(accessor.contains("DB_PASSWORD"));
	}
}
