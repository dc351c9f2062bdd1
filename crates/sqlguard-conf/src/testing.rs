//! Testing utilities
//!
//! Helpers for tests that touch the process environment.

use std::collections::HashMap;
use std::env;

/// Scoped environment changes for a test.
///
/// Records the original value of every variable it touches and restores it
/// on drop. Tests using it should also be marked `#[serial]`, since the
/// process environment is shared between test threads.
///
/// # Examples
///
/// ```
/// use sqlguard_conf::testing::TestEnv;
///
/// {
///     let mut test_env = TestEnv::new();
///     test_env.set_var("SQLGUARD_DOC_VAR", "value");
///     assert_eq!(std::env::var("SQLGUARD_DOC_VAR").unwrap(), "value");
/// }
/// assert!(std::env::var("SQLGUARD_DOC_VAR").is_err());
/// ```
#[derive(Debug, Default)]
pub struct TestEnv {
	original_env: HashMap<String, Option<String>>,
}

impl TestEnv {
	/// Create a guard with no changes recorded
	pub fn new() -> Self {
		Self::default()
	}

	/// Set an environment variable until the guard is dropped
	pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value: String = value.into();
		self.remember(&key);

		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
		unsafe {
			env::set_var(&key, value);
		}
	}

	/// Remove an environment variable until the guard is dropped
	pub fn remove_var(&mut self, key: impl Into<String>) {
		let key = key.into();
		self.remember(&key);

		// SAFETY: Removing environment variables is unsafe in multi-threaded programs.
		// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
		unsafe {
			env::remove_var(&key);
		}
	}

	fn remember(&mut self, key: &str) {
		if !self.original_env.contains_key(key) {
			self.original_env
				.insert(key.to_string(), env::var(key).ok());
		}
	}
}

impl Drop for TestEnv {
	fn drop(&mut self) {
		for (key, original) in self.original_env.drain() {
			// SAFETY: Restoring environment variables is unsafe in multi-threaded programs.
			// TestEnv is designed for use in tests with #[serial] to ensure exclusive access.
			unsafe {
				match original {
					Some(value) => env::set_var(&key, value),
					None => env::remove_var(&key),
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial]
	fn test_restores_unset_variable() {
		{
			let mut test_env = TestEnv::new();
			test_env.set_var("SQLGUARD_TESTENV_A", "temp");
			assert_eq!(env::var("SQLGUARD_TESTENV_A").unwrap(), "temp");
		}
		assert!(env::var("SQLGUARD_TESTENV_A").is_err());
	}

	#[rstest]
	#[serial]
	fn test_restores_previous_value() {
		let mut outer = TestEnv::new();
		outer.set_var("SQLGUARD_TESTENV_B", "original");

		{
			let mut inner = TestEnv::new();
			inner.set_var("SQLGUARD_TESTENV_B", "changed");
			inner.set_var("SQLGUARD_TESTENV_B", "changed-again");
			inner.remove_var("SQLGUARD_TESTENV_B");
			assert!(env::var("SQLGUARD_TESTENV_B").is_err());
		}

		assert_eq!(env::var("SQLGUARD_TESTENV_B").unwrap(), "original");
	}
}
