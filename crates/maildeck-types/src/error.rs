//! Error type shared by the server and the adapter crates.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type MdResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	/// Rejected input, surfaced to the client with a message
	ValidationError(String),
	/// Bad wiring or startup input
	ConfigError(String),
	/// A backing store (settings file, keyring, cache) failed
	StoreUnavailable,

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::StoreUnavailable => write!(f, "store unavailable"),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::ValidationError(msg) => (
				StatusCode::BAD_REQUEST,
				Json(serde_json::json!({ "error": msg })),
			)
				.into_response(),
			Error::StoreUnavailable => {
				(StatusCode::SERVICE_UNAVAILABLE, "store unavailable").into_response()
			}
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4
