//! # sqlguard-conf
//!
//! Credential access without hardcoded secrets.
//!
//! Secrets are read at runtime from a [`SecretSource`](secrets::SecretSource),
//! by default the process environment. A missing secret is an empty string,
//! never a literal fallback baked into the binary.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlguard_conf::get_secret;
//!
//! // Empty unless the deployment sets it
//! let password = get_secret("SQLGUARD_DOC_DB_PASSWORD");
//! assert_eq!(password, "");
//! ```
//!
//! ## Module Organization
//!
//! - [`secrets`]: secret sources and the [`SecretAccessor`](secrets::SecretAccessor)
//! - [`database`]: database credentials read through an accessor
//! - [`testing`]: scoped environment changes for tests

pub mod database;
pub mod secrets;
pub mod testing;

pub use database::DatabaseCredentials;
pub use secrets::{
	EnvError, EnvSecretSource, MemorySecretSource, SecretAccessor, SecretSource, get_secret,
};
