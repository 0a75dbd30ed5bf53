//! In-memory adapters for exercising the pipelines in tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::{
	collections::HashSet,
	path::{Path, PathBuf},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use crate::core::app::{App, AppBuilder, RunMode};
use crate::prelude::*;
use maildeck_types::{
	cache_adapter::CacheAdapter,
	secret_adapter::SecretAdapter,
	settings::{Account, ServerSettings, SettingsDocument, WindowSettings},
	settings_adapter::SettingsAdapter,
	window_adapter::WindowAdapter,
};

pub(crate) struct TestApp {
	pub app: App,
	pub settings: Arc<MemorySettingsAdapter>,
	pub secret: Arc<MemorySecretAdapter>,
	pub cache: Arc<CountingCacheAdapter>,
	pub window: Arc<TestWindowAdapter>,
}

impl TestApp {
	pub fn new() -> Self {
		Self::with_mode(RunMode::Browser)
	}

	pub fn desktop() -> Self {
		Self::with_mode(RunMode::Desktop)
	}

	fn with_mode(mode: RunMode) -> Self {
		let settings = Arc::new(MemorySettingsAdapter::default());
		let secret = Arc::new(MemorySecretAdapter::default());
		let cache = Arc::new(CountingCacheAdapter::default());
		let window = Arc::new(TestWindowAdapter::default());

		let mut builder = AppBuilder::new();
		builder
			.mode(mode)
			.settings_adapter(settings.clone())
			.secret_adapter(secret.clone())
			.cache_adapter(cache.clone())
			.window_adapter(window.clone());
		let app = builder.build().expect("test app");

		TestApp { app, settings, secret, cache, window }
	}
}

pub(crate) fn account_with_passwords(
	name: &str,
	host: &str,
	username: &str,
	imap_password: &str,
	smtp_password: &str,
) -> Account {
	let server = |password: &str| ServerSettings {
		host: Some(host.into()),
		username: Some(username.into()),
		password: Some(password.into()),
		..Default::default()
	};

	Account {
		name: Some(name.into()),
		imap_settings: Some(server(imap_password)),
		smtp_settings: Some(server(smtp_password)),
		..Default::default()
	}
}

#[derive(Debug)]
pub(crate) struct MemorySettingsAdapter {
	path: PathBuf,
	stored: Mutex<Option<SettingsDocument>>,
	changed_keys: Mutex<HashSet<String>>,
	updates: Mutex<Vec<serde_json::Value>>,
	window_writes: Mutex<Vec<WindowSettings>>,
}

impl Default for MemorySettingsAdapter {
	fn default() -> Self {
		MemorySettingsAdapter {
			path: PathBuf::from("/tmp/maildeck-test/settings.json"),
			stored: Mutex::new(None),
			changed_keys: Mutex::new(HashSet::new()),
			updates: Mutex::new(Vec::new()),
			window_writes: Mutex::new(Vec::new()),
		}
	}
}

impl MemorySettingsAdapter {
	pub fn seed(&self, settings: SettingsDocument) {
		*self.stored.lock() = Some(settings);
	}

	/// Keys the next overwrite reports as changed
	pub fn set_changed_keys<'a>(&self, keys: impl IntoIterator<Item = &'a str>) {
		*self.changed_keys.lock() = keys.into_iter().map(String::from).collect();
	}

	pub fn stored(&self) -> Option<SettingsDocument> {
		self.stored.lock().clone()
	}

	pub fn updates(&self) -> Vec<serde_json::Value> {
		self.updates.lock().clone()
	}

	pub fn window_writes(&self) -> Vec<WindowSettings> {
		self.window_writes.lock().clone()
	}
}

#[async_trait]
impl SettingsAdapter for MemorySettingsAdapter {
	fn settings_file(&self) -> &Path {
		&self.path
	}

	async fn read_settings(&self) -> MdResult<SettingsDocument> {
		Ok(self.stored.lock().clone().unwrap_or_default())
	}

	async fn overwrite_settings(&self, settings: &SettingsDocument) -> MdResult<HashSet<String>> {
		*self.stored.lock() = Some(settings.clone());
		Ok(self.changed_keys.lock().clone())
	}

	async fn update_settings(&self, patch: &serde_json::Value) -> MdResult<()> {
		self.updates.lock().push(patch.clone());
		Ok(())
	}

	async fn write_window_settings(&self, window: &WindowSettings) -> MdResult<()> {
		self.window_writes.lock().push(*window);
		Ok(())
	}
}

#[derive(Debug, Default)]
pub(crate) struct MemorySecretAdapter {
	passwords: Mutex<Vec<(String, String, String, String)>>,
}

impl MemorySecretAdapter {
	pub fn passwords(&self) -> Vec<(String, String, String, String)> {
		self.passwords.lock().clone()
	}
}

#[async_trait]
impl SecretAdapter for MemorySecretAdapter {
	async fn set_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
		password: &str,
	) -> MdResult<()> {
		self.passwords.lock().push((
			scope.to_string(),
			host.to_string(),
			username.to_string(),
			password.to_string(),
		));
		Ok(())
	}

	async fn read_password(
		&self,
		scope: &str,
		host: &str,
		username: &str,
	) -> MdResult<Option<Box<str>>> {
		Ok(self
			.passwords
			.lock()
			.iter()
			.rev()
			.find(|(s, h, u, _)| s == scope && h == host && u == username)
			.map(|(_, _, _, password)| password.as_str().into()))
	}
}

#[derive(Debug, Default)]
pub(crate) struct CountingCacheAdapter {
	busts: AtomicUsize,
}

impl CountingCacheAdapter {
	pub fn busts(&self) -> usize {
		self.busts.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl CacheAdapter for CountingCacheAdapter {
	async fn bust_all(&self) -> MdResult<()> {
		self.busts.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}

#[derive(Debug, Default)]
pub(crate) struct TestWindowAdapter {
	geometry: Mutex<WindowSettings>,
	reloads: AtomicUsize,
}

impl TestWindowAdapter {
	pub fn set_geometry(&self, geometry: WindowSettings) {
		*self.geometry.lock() = geometry;
	}

	pub fn reloads(&self) -> usize {
		self.reloads.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl WindowAdapter for TestWindowAdapter {
	async fn size_position(&self) -> MdResult<WindowSettings> {
		Ok(*self.geometry.lock())
	}

	async fn reload_main_window(&self) -> MdResult<()> {
		self.reloads.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}

// vim: ts=4
