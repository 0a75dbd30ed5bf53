//! Settings API response types

use serde::Serialize;

use maildeck_types::settings::SettingsDocument;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
	pub settings: SettingsDocument,
	pub settings_file: Box<str>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
	pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
	pub deleted: bool,
}

// vim: ts=4
