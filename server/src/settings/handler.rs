//! Settings management handlers

use axum::{Json, extract::State};

use crate::core::app::RunMode;
use crate::prelude::*;
use crate::settings::{
	service,
	types::{DeletedResponse, SavedResponse, SettingsResponse},
};
use maildeck_types::settings::SettingsDocument;

/// GET /api/settings - Full settings document plus the backing file path
pub async fn get_settings(State(app): State<App>) -> MdResult<Json<SettingsResponse>> {
	let settings = app.settings_adapter.read_settings().await?;
	let settings_file = app.settings_adapter.settings_file().to_string_lossy().into();

	Ok(Json(SettingsResponse { settings, settings_file }))
}

/// PUT /api/settings - Replace the whole settings document
pub async fn put_settings(
	State(app): State<App>,
	Json(settings): Json<SettingsDocument>,
) -> MdResult<Json<SavedResponse>> {
	service::replace_settings(&app, settings).await?;
	Ok(Json(SavedResponse { saved: true }))
}

/// POST /api/settings - Merge a partial update into the stored document
pub async fn post_settings(
	State(app): State<App>,
	Json(patch): Json<serde_json::Value>,
) -> MdResult<Json<SavedResponse>> {
	service::update_settings(&app, &patch).await?;
	Ok(Json(SavedResponse { saved: true }))
}

/// DELETE /api/settings/cache - Drop folder caches and reload the UI
pub async fn delete_caches(State(app): State<App>) -> MdResult<Json<DeletedResponse>> {
	service::delete_caches(&app).await?;
	Ok(Json(DeletedResponse { deleted: true }))
}

/// POST /api/settings/window - Persist the current window geometry.
/// Outside desktop mode there is no native window; respond "not saved"
/// rather than an error.
pub async fn update_window_settings(
	State(app): State<App>,
) -> MdResult<Json<SavedResponse>> {
	if app.opts.mode != RunMode::Desktop {
		return Ok(Json(SavedResponse { saved: false }));
	}

	service::save_window_settings(&app).await?;
	Ok(Json(SavedResponse { saved: true }))
}


// vim: ts=4
