//! Adapter that stores credentials outside the settings document.
//!
//! Secrets are keyed by (scope, host, username). The settings pipeline uses
//! the `account` scope; other scopes are free for future subsystems.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait SecretAdapter: Debug + Send + Sync {
	async fn set_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
		password: &str,
	) -> MdResult<()>;

	/// Returns `None` when no credential is stored for the key
	async fn read_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
	) -> MdResult<Option<Box<str>>>;
}

// vim: ts=4
