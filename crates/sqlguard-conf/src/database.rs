//! Database connection credentials
//!
//! The connection URL, user and password are read through a
//! [`SecretAccessor`] so none of them live in source code.

use crate::secrets::{SecretAccessor, SecretSource};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Secret name holding the connection URL
pub const DB_URL: &str = "DB_URL";
/// Secret name holding the database user
pub const DB_USER: &str = "DB_USER";
/// Secret name holding the database password
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Credentials handed to a database driver.
///
/// Absent secrets are empty; there are no built-in defaults. `Debug` prints
/// the URL and user but redacts the password.
pub struct DatabaseCredentials {
	/// Connection URL, e.g. `mysql://localhost/db`
	pub url: String,
	/// Database user
	pub user: String,
	password: SecretString,
}

impl DatabaseCredentials {
	/// Read `DB_URL`, `DB_USER` and `DB_PASSWORD` from `accessor`.
	///
	/// # Example
	///
	/// ```rust
	/// use sqlguard_conf::database::DatabaseCredentials;
	/// use sqlguard_conf::secrets::{MemorySecretSource, SecretAccessor};
	///
	/// let accessor = SecretAccessor::new(
	///     MemorySecretSource::new()
	///         .with_secret("DB_URL", "mysql://localhost/db")
	///         .with_secret("DB_USER", "app"),
	/// );
	///
	/// let credentials = DatabaseCredentials::from_accessor(&accessor);
	/// assert_eq!(credentials.user, "app");
	/// assert!(!credentials.has_password());
	/// assert!(!credentials.is_complete());
	/// ```
	pub fn from_accessor<S: SecretSource>(accessor: &SecretAccessor<S>) -> Self {
		let credentials = Self {
			url: accessor.get_secret(DB_URL),
			user: accessor.get_secret(DB_USER),
			password: accessor.get_secret_string(DB_PASSWORD),
		};

		if !credentials.is_complete() {
			tracing::debug!(
				has_url = !credentials.url.is_empty(),
				has_user = !credentials.user.is_empty(),
				has_password = credentials.has_password(),
				"Database credentials are incomplete"
			);
		}

		credentials
	}

	/// Read credentials from the process environment
	pub fn from_env() -> Self {
		Self::from_accessor(&SecretAccessor::from_env())
	}

	/// The password, still wrapped
	pub fn password(&self) -> &SecretString {
		&self.password
	}

	/// Returns `true` if a non-empty password was supplied
	pub fn has_password(&self) -> bool {
		!self.password.expose_secret().is_empty()
	}

	/// Returns `true` if URL, user and password are all non-empty
	pub fn is_complete(&self) -> bool {
		!self.url.is_empty() && !self.user.is_empty() && self.has_password()
	}
}

impl fmt::Debug for DatabaseCredentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DatabaseCredentials")
			.field("url", &self.url)
			.field("user", &self.user)
			.field("password", &"[REDACTED]")
			.finish()
	}
}
