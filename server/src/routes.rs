//! HTTP route table

use axum::{
	Router,
	routing::{delete, get, post},
};

use crate::App;
use crate::settings;

pub fn init(app: App) -> Router {
	Router::new()
		.route(
			"/api/settings",
			get(settings::handler::get_settings)
				.put(settings::handler::put_settings)
				.post(settings::handler::post_settings),
		)
		.route("/api/settings/cache", delete(settings::handler::delete_caches))
		.route("/api/settings/window", post(settings::handler::update_window_settings))
		.with_state(app)
}

// vim: ts=4
