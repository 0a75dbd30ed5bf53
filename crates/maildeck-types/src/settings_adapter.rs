//! Adapter that persists the settings document.

use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt::Debug;
use std::path::Path;

use crate::prelude::*;
use crate::settings::{SettingsDocument, WindowSettings};

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Location of the backing settings file, surfaced to the client UI
	fn settings_file(&self) -> &Path;

	/// Reads the full settings document, falling back to defaults on first run
	async fn read_settings(&self) -> MdResult<SettingsDocument>;

	/// Replaces the whole document.
	/// Returns the dotted keys whose value changed, recursing into nested
	/// objects (e.g. `system.sync_days`).
	async fn overwrite_settings(&self, settings: &SettingsDocument) -> MdResult<HashSet<String>>;

	/// Deep-merges a partial document into the stored one.
	/// Objects merge recursively, any other value replaces.
	async fn update_settings(&self, patch: &serde_json::Value) -> MdResult<()>;

	/// Stores the window geometry under the `window` key
	async fn write_window_settings(&self, window: &WindowSettings) -> MdResult<()>;
}

// vim: ts=4
