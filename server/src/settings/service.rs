//! Settings pipelines behind the API handlers
//!
//! Each pipeline is an explicit ordered sequence: validation happens before
//! any mutation, and nothing after a successful persist is rolled back.

use crate::prelude::*;
use maildeck_types::settings::{
	CREDENTIAL_SCOPE_ACCOUNT, Credential, SETTING_SYNC_DAYS, ServerSettings, SettingsDocument,
	validate_unique_accounts,
};

/// Replaces the full settings document.
///
/// Order: validate accounts, route credentials to the secret store, persist
/// the stripped document, then invalidate whatever the changed keys require.
/// A validation failure aborts before any side effect.
pub async fn replace_settings(app: &App, mut settings: SettingsDocument) -> MdResult<()> {
	validate_unique_accounts(&settings.accounts)?;

	for account in &mut settings.accounts {
		store_credential(app, account.imap_settings.as_mut()).await?;
		store_credential(app, account.smtp_settings.as_mut()).await?;
	}

	let changed_keys = app.settings_adapter.overwrite_settings(&settings).await?;
	debug!("Settings overwrite changed keys: {:?}", changed_keys);

	// A different sync horizon invalidates previously fetched ranges
	if changed_keys.contains(SETTING_SYNC_DAYS) {
		app.cache_adapter.bust_all().await?;
	}

	// Un-cache accounts and folders so the next lookup sees the new settings
	app.accounts.reset();
	app.window_adapter.reload_main_window().await?;

	Ok(())
}

/// Strips the password from one protocol section and forwards the credential
/// to the secret store. No-op unless host, username and password are all set.
async fn store_credential(app: &App, server: Option<&mut ServerSettings>) -> MdResult<()> {
	let Some(server) = server else { return Ok(()) };
	let Some(Credential { host, username, password }) = server.take_credential() else {
		return Ok(());
	};

	app.secret_adapter
		.set_password(CREDENTIAL_SCOPE_ACCOUNT, &host, &username, &password)
		.await
}

/// Merges a partial update into the stored document.
/// Intentionally quiet: no cache bust, no window reload.
pub async fn update_settings(app: &App, patch: &serde_json::Value) -> MdResult<()> {
	if !patch.is_object() {
		return Err(Error::ValidationError("Settings update must be a JSON object".into()));
	}

	app.settings_adapter.update_settings(patch).await
}

pub async fn delete_caches(app: &App) -> MdResult<()> {
	app.cache_adapter.bust_all().await?;
	app.window_adapter.reload_main_window().await
}

/// Reads the live window geometry and persists it into the settings document
pub async fn save_window_settings(app: &App) -> MdResult<()> {
	let window = app.window_adapter.size_position().await?.clamped();
	app.settings_adapter.write_window_settings(&window).await
}


// vim: ts=4
