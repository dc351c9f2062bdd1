//! In-memory secret source

use super::SecretSource;
use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

/// In-memory secret source.
///
/// Stands in for the process environment in tests and lets embedding
/// applications inject secrets from their own configuration.
#[derive(Default)]
pub struct MemorySecretSource {
	secrets: RwLock<HashMap<String, SecretString>>,
}

impl MemorySecretSource {
	/// Create an empty source
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style insert
	pub fn with_secret(self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	/// Store a secret, replacing any previous value
	pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
		let value: String = value.into();
		self.secrets
			.write()
			.insert(name.into(), SecretString::from(value));
	}

	/// Remove a secret
	pub fn remove(&self, name: &str) {
		self.secrets.write().remove(name);
	}

	/// Number of stored secrets
	pub fn len(&self) -> usize {
		self.secrets.read().len()
	}

	/// Returns `true` if no secrets are stored
	pub fn is_empty(&self) -> bool {
		self.secrets.read().is_empty()
	}
}

impl std::fmt::Debug for MemorySecretSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut names: Vec<String> = self.secrets.read().keys().cloned().collect();
		names.sort();
		f.debug_struct("MemorySecretSource")
			.field("secrets", &names)
			.finish()
	}
}

impl SecretSource for MemorySecretSource {
	fn lookup(&self, name: &str) -> Option<String> {
		self.secrets
			.read()
			.get(name)
			.map(|secret| secret.expose_secret().to_string())
	}

	fn name(&self) -> &str {
		"memory"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	fn test_memory_source_basic() {
		let source = MemorySecretSource::new();
		assert!(source.is_empty());

		// Set a secret
		source.insert("DB_PASSWORD", "from-vault");
		assert_eq!(source.lookup("DB_PASSWORD"), Some("from-vault".to_string()));
		assert_eq!(source.len(), 1);

		// Replace it
		source.insert("DB_PASSWORD", "rotated");
		assert_eq!(source.lookup("DB_PASSWORD"), Some("rotated".to_string()));

		// Remove it
		source.remove("DB_PASSWORD");
		assert_eq!(source.lookup("DB_PASSWORD"), None);
	}

	#[rstest]
	fn test_memory_source_builder() {
		let source = MemorySecretSource::new()
			.with_secret("DB_USER", "app")
			.with_secret("DB_PASSWORD", "pw");

		assert_eq!(source.lookup("DB_USER"), Some("app".to_string()));
		assert_eq!(source.len(), 2);
		assert_eq!(source.name(), "memory");
	}

	#[rstest]
	fn test_memory_source_debug_lists_names_only() {
		let source = MemorySecretSource::new().with_secret("DB_PASSWORD", "hunter2");
		let debug = format!("{:?}", source);

		assert!(debug.contains("DB_PASSWORD"));
		assert!(!debug.contains("hunter2"));
	}
}
