//! Environment variable secret source

use super::SecretSource;
use std::env::{self, VarError};

/// Reads secrets from process environment variables.
///
/// With a prefix such as `"APP_"`, the secret `DB_PASSWORD` is read from
/// `APP_DB_PASSWORD`. Names are used verbatim; no case conversion happens.
///
/// The process environment is owned by the host process and only read here.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretSource {
	prefix: String,
}

impl EnvSecretSource {
	/// Create a source that prepends `prefix` to every secret name
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}
	/// Create a source that reads secret names as-is
	pub fn without_prefix() -> Self {
		Self::default()
	}

	/// The configured prefix (empty when none)
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Full environment variable name for a secret
	pub fn env_var_name(&self, name: &str) -> String {
		format!("{}{}", self.prefix, name)
	}
}

impl SecretSource for EnvSecretSource {
	fn lookup(&self, name: &str) -> Option<String> {
		let env_var = match self.checked_var_name(name) {
			Ok(env_var) => env_var,
			Err(e) => {
				tracing::warn!(error = %e, "Skipping secret lookup");
				return None;
			}
		};

		match env::var(&env_var) {
			Ok(value) => Some(value),
			Err(VarError::NotPresent) => None,
			Err(VarError::NotUnicode(_)) => {
				tracing::warn!(
					env_var = %env_var,
					"Environment variable is not valid UTF-8; treating secret as absent"
				);
				None
			}
		}
	}

	fn name(&self) -> &str {
		"env"
	}
}

impl EnvSecretSource {
	/// Prefixed variable name, if the platform could store it.
	///
	/// `std::env::var` panics on a key containing `=` or NUL, so those are
	/// turned into an [`EnvError`] before any read happens.
	fn checked_var_name(&self, name: &str) -> Result<String, EnvError> {
		let env_var = self.env_var_name(name);
		if env_var.is_empty() {
			return Err(EnvError::EmptyName);
		}
		if let Some((position, _)) = env_var.char_indices().find(|(_, c)| c.is_control()) {
			return Err(EnvError::ControlCharacter {
				env_var: env_var.escape_debug().to_string(),
				position,
			});
		}
		if env_var.contains('=') {
			return Err(EnvError::EqualsSign { env_var });
		}
		Ok(env_var)
	}
}

/// Reasons a secret name cannot be read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
	#[error("secret name resolves to an empty variable name")]
	EmptyName,
	#[error("variable {env_var} has a control character at byte {position}")]
	ControlCharacter { env_var: String, position: usize },
	#[error("variable {env_var} contains '=', which separates keys from values")]
	EqualsSign { env_var: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::TestEnv;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serial_test::serial;

	#[rstest]
	#[serial]
	fn test_env_source_reads_variable() {
		let mut test_env = TestEnv::new();
		test_env.set_var("SQLGUARD_TEST_TOKEN", "s3cr3t");

		let source = EnvSecretSource::without_prefix();

		assert_eq!(source.lookup("SQLGUARD_TEST_TOKEN"), Some("s3cr3t".to_string()));
	}

	#[rstest]
	#[serial]
	fn test_env_source_with_prefix() {
		let mut test_env = TestEnv::new();
		test_env.set_var("APP_DB_PASSWORD", "from-prefix");
		test_env.remove_var("DB_PASSWORD");

		let source = EnvSecretSource::new("APP_");

		assert_eq!(source.env_var_name("DB_PASSWORD"), "APP_DB_PASSWORD");
		assert_eq!(source.lookup("DB_PASSWORD"), Some("from-prefix".to_string()));
		assert_eq!(EnvSecretSource::without_prefix().lookup("DB_PASSWORD"), None);
	}

	#[rstest]
	#[serial]
	fn test_env_source_name_is_case_sensitive() {
		let mut test_env = TestEnv::new();
		test_env.set_var("SQLGUARD_CASE", "upper");
		test_env.remove_var("sqlguard_case");

		let source = EnvSecretSource::without_prefix();

		assert_eq!(source.lookup("SQLGUARD_CASE"), Some("upper".to_string()));
		assert_eq!(source.lookup("sqlguard_case"), None);
	}

	#[rstest]
	#[serial]
	fn test_env_source_missing_is_none() {
		let mut test_env = TestEnv::new();
		test_env.remove_var("SQLGUARD_DEFINITELY_UNSET");

		assert_eq!(
			EnvSecretSource::without_prefix().lookup("SQLGUARD_DEFINITELY_UNSET"),
			None
		);
	}

	#[rstest]
	#[case::empty("")]
	#[case::equals("DB=PASSWORD")]
	#[case::nul("DB\0PASSWORD")]
	fn test_env_source_invalid_name_is_none(#[case] name: &str) {
		assert_eq!(EnvSecretSource::without_prefix().lookup(name), None);
	}

	#[rstest]
	fn test_checked_var_name_applies_prefix() {
		let source = EnvSecretSource::new("APP_");
		assert_eq!(source.checked_var_name("DB_PASSWORD").unwrap(), "APP_DB_PASSWORD");
	}

	#[rstest]
	#[case::empty("", EnvError::EmptyName)]
	#[case::nul(
		"MY\0VAR",
		EnvError::ControlCharacter { env_var: "MY\\0VAR".to_string(), position: 2 }
	)]
	#[case::equals("MY=VAR", EnvError::EqualsSign { env_var: "MY=VAR".to_string() })]
	fn test_checked_var_name_rejects(#[case] name: &str, #[case] expected: EnvError) {
		// Arrange
		let source = EnvSecretSource::without_prefix();

		// Act
		let err = source.checked_var_name(name).unwrap_err();

		// Assert
		assert_eq!(err, expected);
	}

	#[rstest]
	fn test_prefix_alone_is_not_empty() {
		let source = EnvSecretSource::new("APP_");
		assert_eq!(source.checked_var_name("").unwrap(), "APP_");
	}

	#[rstest]
	fn test_error_messages() {
		assert_eq!(
			EnvError::EqualsSign {
				env_var: "A=B".to_string()
			}
			.to_string(),
			"variable A=B contains '=', which separates keys from values"
		);
		assert!(
			EnvError::ControlCharacter {
				env_var: "A".to_string(),
				position: 1
			}
			.to_string()
			.contains("control character at byte 1")
		);
	}

	#[rstest]
	fn test_source_name() {
		assert_eq!(EnvSecretSource::default().name(), "env");
		assert_eq!(EnvSecretSource::new("X_").prefix(), "X_");
	}
}
