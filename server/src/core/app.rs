//! App state type

use std::sync::Arc;

use crate::accounts::AccountRegistry;
use crate::core::webserver;
use crate::prelude::*;
use crate::routes;
use maildeck_types::{
	cache_adapter::CacheAdapter, secret_adapter::SecretAdapter,
	settings_adapter::SettingsAdapter, window_adapter::WindowAdapter,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How the client UI is being served
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunMode {
	/// Packaged desktop application with a native window
	Desktop,
	/// Plain browser tab; window operations become soft no-ops
	Browser,
}

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub accounts: AccountRegistry,

	pub settings_adapter: Arc<dyn SettingsAdapter>,
	pub secret_adapter: Arc<dyn SecretAdapter>,
	pub cache_adapter: Arc<dyn CacheAdapter>,
	pub window_adapter: Arc<dyn WindowAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub settings_adapter: Option<Arc<dyn SettingsAdapter>>,
	pub secret_adapter: Option<Arc<dyn SecretAdapter>>,
	pub cache_adapter: Option<Arc<dyn CacheAdapter>>,
	pub window_adapter: Option<Arc<dyn WindowAdapter>>,
}

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub mode: RunMode,
	pub listen: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				mode: RunMode::Browser,
				listen: "127.0.0.1:4420".into(),
			},
			adapters: Adapters {
				settings_adapter: None,
				secret_adapter: None,
				cache_adapter: None,
				window_adapter: None,
			},
		}
	}

	// Opts
	pub fn mode(&mut self, mode: RunMode) -> &mut Self { self.opts.mode = mode; self }
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }

	// Adapters
	pub fn settings_adapter(&mut self, settings_adapter: Arc<dyn SettingsAdapter>) -> &mut Self { self.adapters.settings_adapter = Some(settings_adapter); self }
	pub fn secret_adapter(&mut self, secret_adapter: Arc<dyn SecretAdapter>) -> &mut Self { self.adapters.secret_adapter = Some(secret_adapter); self }
	pub fn cache_adapter(&mut self, cache_adapter: Arc<dyn CacheAdapter>) -> &mut Self { self.adapters.cache_adapter = Some(cache_adapter); self }
	pub fn window_adapter(&mut self, window_adapter: Arc<dyn WindowAdapter>) -> &mut Self { self.adapters.window_adapter = Some(window_adapter); self }

	/// Assembles the app state without starting the webserver
	pub fn build(self) -> MdResult<App> {
		let settings_adapter = self
			.adapters
			.settings_adapter
			.ok_or_else(|| Error::ConfigError("No settings adapter".into()))?;
		let secret_adapter = self
			.adapters
			.secret_adapter
			.ok_or_else(|| Error::ConfigError("No secret adapter".into()))?;
		let cache_adapter = self
			.adapters
			.cache_adapter
			.ok_or_else(|| Error::ConfigError("No cache adapter".into()))?;
		let window_adapter = self
			.adapters
			.window_adapter
			.ok_or_else(|| Error::ConfigError("No window adapter".into()))?;

		Ok(Arc::new(AppState {
			opts: self.opts,
			accounts: AccountRegistry::new(),
			settings_adapter,
			secret_adapter,
			cache_adapter,
			window_adapter,
		}))
	}

	pub async fn run(self) -> MdResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Maildeck settings service v{}", VERSION);

		let app = self.build()?;
		let router = routes::init(app.clone());
		webserver::run(app, router).await
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
