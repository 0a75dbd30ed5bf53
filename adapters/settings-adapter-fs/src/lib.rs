//! JSON-file settings store for Maildeck.
//!
//! The whole settings document lives in one pretty-printed JSON file. Writes
//! go through a temp file plus rename, and read-modify-write cycles are
//! serialized with an internal lock; concurrent readers are safe at any
//! point.

use std::{
	collections::HashSet,
	path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

use maildeck::prelude::*;
use maildeck::settings::{SettingsDocument, WindowSettings};
use maildeck::settings_adapter::SettingsAdapter;

#[derive(Debug)]
pub struct SettingsAdapterFs {
	path: Box<Path>,
	write_lock: Mutex<()>,
}

impl SettingsAdapterFs {
	pub async fn new(path: impl Into<PathBuf>) -> MdResult<Self> {
		let path: PathBuf = path.into();
		if let Some(dir) = path.parent() {
			fs::create_dir_all(dir).await?;
		}

		Ok(Self { path: path.into(), write_lock: Mutex::new(()) })
	}

	/// Raw document as stored; an absent file reads as an empty object
	async fn read_value(&self) -> MdResult<serde_json::Value> {
		match fs::read(&self.path).await {
			Ok(raw) => serde_json::from_slice(&raw)
				.inspect_err(|err| warn!("Settings file {:?} is corrupt: {}", self.path, err))
				.map_err(|_| Error::StoreUnavailable),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				Ok(serde_json::Value::Object(serde_json::Map::new()))
			}
			Err(err) => {
				warn!("Cannot read settings file {:?}: {}", self.path, err);
				Err(Error::StoreUnavailable)
			}
		}
	}

	async fn write_value(&self, value: &serde_json::Value) -> MdResult<()> {
		let raw = serde_json::to_vec_pretty(value)
			.inspect_err(|err| warn!("Cannot serialize settings: {}", err))
			.map_err(|_| Error::StoreUnavailable)?;

		let tmp = self.path.with_extension("json.tmp");
		let result: std::io::Result<()> = async {
			let mut file = fs::File::create(&tmp).await?;
			file.write_all(&raw).await?;
			file.sync_all().await?;
			fs::rename(&tmp, &self.path).await
		}
		.await;

		result
			.inspect_err(|err| warn!("Cannot write settings file {:?}: {}", self.path, err))
			.map_err(|_| Error::StoreUnavailable)
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterFs {
	fn settings_file(&self) -> &Path {
		&self.path
	}

	async fn read_settings(&self) -> MdResult<SettingsDocument> {
		let value = self.read_value().await?;
		serde_json::from_value(value)
			.inspect_err(|err| warn!("Settings file {:?} has bad shape: {}", self.path, err))
			.map_err(|_| Error::StoreUnavailable)
	}

	async fn overwrite_settings(&self, settings: &SettingsDocument) -> MdResult<HashSet<String>> {
		let _guard = self.write_lock.lock().await;

		let old = self.read_value().await?;
		let new = serde_json::to_value(settings)
			.inspect_err(|err| warn!("Cannot serialize settings: {}", err))
			.map_err(|_| Error::StoreUnavailable)?;

		let changed = changed_keys(&old, &new);
		self.write_value(&new).await?;
		debug!("Settings overwrite: {} keys changed", changed.len());

		Ok(changed)
	}

	async fn update_settings(&self, patch: &serde_json::Value) -> MdResult<()> {
		let _guard = self.write_lock.lock().await;

		let mut value = self.read_value().await?;
		merge_value(&mut value, patch);
		self.write_value(&value).await
	}

	async fn write_window_settings(&self, window: &WindowSettings) -> MdResult<()> {
		let geometry = serde_json::to_value(window)
			.inspect_err(|err| warn!("Cannot serialize window settings: {}", err))
			.map_err(|_| Error::StoreUnavailable)?;

		let mut patch = serde_json::Map::new();
		patch.insert("window".into(), geometry);
		self.update_settings(&serde_json::Value::Object(patch)).await
	}
}

/// Dotted keys whose value differs between two documents.
/// Objects are compared per key, recursively; anything else wholesale.
fn changed_keys(old: &serde_json::Value, new: &serde_json::Value) -> HashSet<String> {
	let mut changed = HashSet::new();
	collect_changed(None, old, new, &mut changed);
	changed
}

fn collect_changed(
	prefix: Option<&str>,
	old: &serde_json::Value,
	new: &serde_json::Value,
	out: &mut HashSet<String>,
) {
	match (old.as_object(), new.as_object()) {
		(Some(old_map), Some(new_map)) => {
			let added = new_map.keys().filter(|key| !old_map.contains_key(*key));
			for key in old_map.keys().chain(added) {
				let path = match prefix {
					Some(prefix) => format!("{}.{}", prefix, key),
					None => key.clone(),
				};
				match (old_map.get(key), new_map.get(key)) {
					(Some(old_value), Some(new_value)) => {
						collect_changed(Some(&path), old_value, new_value, out);
					}
					_ => {
						out.insert(path);
					}
				}
			}
		}
		_ => {
			if old != new {
				if let Some(prefix) = prefix {
					out.insert(prefix.to_string());
				}
			}
		}
	}
}

/// Deep merge: objects merge per key, any other value replaces
fn merge_value(target: &mut serde_json::Value, patch: &serde_json::Value) {
	match (target.as_object_mut(), patch.as_object()) {
		(Some(target_map), Some(patch_map)) => {
			for (key, patch_value) in patch_map {
				match target_map.get_mut(key) {
					Some(target_value) if target_value.is_object() && patch_value.is_object() => {
						merge_value(target_value, patch_value);
					}
					_ => {
						target_map.insert(key.clone(), patch_value.clone());
					}
				}
			}
		}
		_ => *target = patch.clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use maildeck::settings::{Account, ServerSettings, SystemSettings};

	async fn adapter(dir: &tempfile::TempDir) -> SettingsAdapterFs {
		SettingsAdapterFs::new(dir.path().join("settings.json")).await.expect("adapter")
	}

	fn document(sync_days: u32) -> SettingsDocument {
		SettingsDocument {
			accounts: vec![Account {
				name: Some("work".into()),
				imap_settings: Some(ServerSettings {
					host: Some("imap.x.com".into()),
					username: Some("a".into()),
					..Default::default()
				}),
				..Default::default()
			}],
			system: Some(SystemSettings { sync_days: Some(sync_days), ..Default::default() }),
			..Default::default()
		}
	}

	#[tokio::test]
	async fn missing_file_reads_as_defaults() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = adapter(&dir).await;

		let settings = adapter.read_settings().await.expect("read");
		assert_eq!(settings, SettingsDocument::default());
	}

	#[tokio::test]
	async fn overwrite_round_trips_and_reports_nested_changes() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = adapter(&dir).await;

		adapter.overwrite_settings(&document(30)).await.expect("first overwrite");
		assert_eq!(adapter.read_settings().await.expect("read"), document(30));

		let changed = adapter.overwrite_settings(&document(7)).await.expect("second overwrite");
		assert_eq!(changed, HashSet::from(["system.sync_days".to_string()]));

		let changed = adapter.overwrite_settings(&document(7)).await.expect("third overwrite");
		assert!(changed.is_empty());
	}

	#[tokio::test]
	async fn overwrite_reports_removed_keys() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = adapter(&dir).await;

		adapter.overwrite_settings(&document(30)).await.expect("overwrite");
		let changed = adapter
			.overwrite_settings(&SettingsDocument {
				accounts: document(30).accounts,
				..Default::default()
			})
			.await
			.expect("overwrite without system");

		assert_eq!(changed, HashSet::from(["system".to_string()]));
	}

	#[tokio::test]
	async fn update_merges_deeply_without_clobbering_siblings() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = adapter(&dir).await;
		adapter.overwrite_settings(&document(30)).await.expect("overwrite");

		let patch = serde_json::json!({ "system": { "sync_interval": 60000 } });
		adapter.update_settings(&patch).await.expect("update");

		let settings = adapter.read_settings().await.expect("read");
		let system = settings.system.expect("system");
		assert_eq!(system.sync_days, Some(30));
		assert_eq!(system.sync_interval, Some(60000));
		assert_eq!(settings.accounts.len(), 1);
	}

	#[tokio::test]
	async fn window_settings_land_under_the_window_key() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = adapter(&dir).await;

		let window = WindowSettings { width: 1280, height: 800, x: 60, y: 40 };
		adapter.write_window_settings(&window).await.expect("write window");

		let settings = adapter.read_settings().await.expect("read");
		assert_eq!(settings.window, Some(window));
	}

	#[test]
	fn changed_keys_handles_shape_changes() {
		let old = serde_json::json!({ "a": { "b": 1 }, "c": 2 });
		let new = serde_json::json!({ "a": 5, "d": true });

		let changed = changed_keys(&old, &new);
		assert_eq!(
			changed,
			HashSet::from(["a".to_string(), "c".to_string(), "d".to_string()])
		);
	}
}

// vim: ts=4
