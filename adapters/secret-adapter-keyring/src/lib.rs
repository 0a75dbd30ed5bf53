//! Platform-keyring secret store for Maildeck.
//!
//! Credentials live in the operating system keyring (Keychain on macOS,
//! Credential Manager on Windows, Secret Service on Linux). Entries are
//! keyed by an `<app>/<scope>/<host>` service name and the account
//! username; the settings document never sees them. Keyring calls block, so
//! they run on the blocking thread pool.

use async_trait::async_trait;
use keyring::Entry;

use maildeck::prelude::*;
use maildeck::secret_adapter::SecretAdapter;

#[derive(Debug)]
pub struct SecretAdapterKeyring {
	app_name: Box<str>,
}

impl SecretAdapterKeyring {
	pub fn new(app_name: impl Into<Box<str>>) -> Self {
		Self { app_name: app_name.into() }
	}

	fn service(&self, scope: &str, host: &str) -> String {
		format!("{}/{}/{}", self.app_name, scope, host)
	}

	fn entry(service: &str, username: &str) -> MdResult<Entry> {
		Entry::new(service, username)
			.inspect_err(|err| warn!("Keyring entry {}/{}: {}", service, username, err))
			.map_err(|_| Error::StoreUnavailable)
	}
}

#[async_trait]
impl SecretAdapter for SecretAdapterKeyring {
	async fn set_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
		password: &str,
	) -> MdResult<()> {
		let service = self.service(scope, host);
		let username = username.to_string();
		let password = password.to_string();

		tokio::task::spawn_blocking(move || {
			let entry = Self::entry(&service, &username)?;
			entry
				.set_password(&password)
				.inspect_err(|err| warn!("Keyring set {}/{}: {}", service, username, err))
				.map_err(|_| Error::StoreUnavailable)
		})
		.await
		.map_err(|_| Error::StoreUnavailable)?
	}

	async fn read_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
	) -> MdResult<Option<Box<str>>> {
		let service = self.service(scope, host);
		let username = username.to_string();

		tokio::task::spawn_blocking(move || {
			let entry = Self::entry(&service, &username)?;
			match entry.get_password() {
				Ok(password) => Ok(Some(password.into())),
				Err(keyring::Error::NoEntry) => Ok(None),
				Err(err) => {
					warn!("Keyring get {}/{}: {}", service, username, err);
					Err(Error::StoreUnavailable)
				}
			}
		})
		.await
		.map_err(|_| Error::StoreUnavailable)?
	}
}


// vim: ts=4
