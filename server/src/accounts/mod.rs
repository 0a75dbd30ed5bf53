//! In-process account registry
//!
//! Accounts parsed from the settings document are cached here so the mail
//! subsystems don't re-read the settings file on every lookup. Any settings
//! write resets the registry; the next lookup re-reads and re-attaches
//! credentials from the secret store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;
use maildeck_types::settings::{Account, CREDENTIAL_SCOPE_ACCOUNT, ServerSettings};

#[derive(Debug, Default)]
pub struct AccountRegistry {
	accounts: RwLock<HashMap<Box<str>, Arc<Account>>>,
}

impl AccountRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, name: &str) -> Option<Arc<Account>> {
		self.accounts.read().get(name).cloned()
	}

	pub fn put(&self, name: Box<str>, account: Arc<Account>) {
		self.accounts.write().insert(name, account);
	}

	/// Drops all cached accounts so the next lookup re-reads the settings
	pub fn reset(&self) {
		self.accounts.write().clear();
	}
}

/// Looks up an account by name, reading through the registry cache.
/// Passwords stripped out at save time are re-attached from the secret store.
pub async fn get_account(app: &App, name: &str) -> MdResult<Arc<Account>> {
	if let Some(account) = app.accounts.get(name) {
		debug!("Account cache hit: {}", name);
		return Ok(account);
	}

	let settings = app.settings_adapter.read_settings().await?;
	let mut account = settings
		.accounts
		.into_iter()
		.find(|account| account.name.as_deref() == Some(name))
		.ok_or(Error::NotFound)?;

	attach_password(app, account.imap_settings.as_mut()).await?;
	attach_password(app, account.smtp_settings.as_mut()).await?;

	let account = Arc::new(account);
	app.accounts.put(name.into(), account.clone());
	Ok(account)
}

async fn attach_password(app: &App, server: Option<&mut ServerSettings>) -> MdResult<()> {
	let Some(server) = server else { return Ok(()) };
	if server.password.is_some() {
		return Ok(());
	}
	let (Some(host), Some(username)) = (&server.host, &server.username) else {
		return Ok(());
	};

	server.password = app
		.secret_adapter
		.read_password(CREDENTIAL_SCOPE_ACCOUNT, host, username)
		.await?;
	Ok(())
}


// vim: ts=4
