//! Settings document model.
//!
//! The document is a typed top-level schema over an otherwise open JSON
//! object: known sections get fields, everything else is preserved in
//! flattened maps so a newer client can round-trip keys this build does not
//! know about.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::prelude::*;

/// Dotted key whose change invalidates previously synced ranges
pub const SETTING_SYNC_DAYS: &str = "system.sync_days";

/// Secret store scope for account credentials
pub const CREDENTIAL_SCOPE_ACCOUNT: &str = "account";

pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// The full persisted configuration record
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SettingsDocument {
	#[serde(default)]
	pub accounts: Vec<Account>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub system: Option<SystemSettings>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub window: Option<WindowSettings>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub style: Option<serde_json::Value>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Account {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<Box<str>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub imap_settings: Option<ServerSettings>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub smtp_settings: Option<ServerSettings>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Connection settings for one protocol endpoint of an account
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServerSettings {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub host: Option<Box<str>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub port: Option<u16>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<Box<str>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub password: Option<Box<str>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ssl: Option<bool>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A credential routed to the secret store, never persisted with the document
#[derive(Clone, Debug, PartialEq)]
pub struct Credential {
	pub host: Box<str>,
	pub username: Box<str>,
	pub password: Box<str>,
}

impl ServerSettings {
	/// Removes the password and returns the full credential tuple.
	///
	/// Only acts when host, username and password are all present; anything
	/// less is left untouched, password included.
	pub fn take_credential(&mut self) -> Option<Credential> {
		if self.host.is_none() || self.username.is_none() || self.password.is_none() {
			return None;
		}

		Some(Credential {
			host: self.host.clone()?,
			username: self.username.clone()?,
			password: self.password.take()?,
		})
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SystemSettings {
	/// Sync horizon in days; 0 or absent means everything
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sync_days: Option<u32>,
	/// Interval between folder syncs, in milliseconds
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sync_interval: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub undo_ms: Option<u32>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Main window geometry
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WindowSettings {
	pub width: u32,
	pub height: u32,
	pub x: i32,
	pub y: i32,
}

impl WindowSettings {
	/// Guards against persisting degenerate geometry (offscreen or tiny)
	pub fn clamped(self) -> WindowSettings {
		WindowSettings {
			width: self.width.max(MIN_WINDOW_WIDTH),
			height: self.height.max(MIN_WINDOW_HEIGHT),
			x: self.x.max(0),
			y: self.y.max(0),
		}
	}
}

/// Rejects account lists where two accounts share identifying attributes.
///
/// Identity is the account name, and the (host, username) pair within each
/// protocol. The whole write is rejected on the first duplicate.
pub fn validate_unique_accounts(accounts: &[Account]) -> MdResult<()> {
	let mut names = HashSet::new();
	let mut endpoints = HashSet::new();

	for account in accounts {
		if let Some(name) = &account.name {
			if !names.insert(name.as_ref()) {
				return Err(Error::ValidationError(format!("Duplicate account name: {}", name)));
			}
		}

		for (protocol, settings) in
			[("imap", &account.imap_settings), ("smtp", &account.smtp_settings)]
		{
			let Some(settings) = settings else { continue };
			let (Some(host), Some(username)) = (&settings.host, &settings.username) else {
				continue;
			};

			if !endpoints.insert((protocol, host.as_ref(), username.as_ref())) {
				return Err(Error::ValidationError(format!(
					"Duplicate {} account: {}@{}",
					protocol, username, host
				)));
			}
		}
	}

	Ok(())
}


// vim: ts=4
