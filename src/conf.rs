//! Secrets and credentials module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sqlguard::conf::DatabaseCredentials;
//!
//! let credentials = DatabaseCredentials::from_env();
//! ```

pub use sqlguard_conf::*;
