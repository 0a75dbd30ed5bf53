use std::{env, path::PathBuf, sync::Arc};

use maildeck::AppBuilder;
use maildeck_cache_adapter_fs::CacheAdapterFs;
use maildeck_secret_adapter_keyring::SecretAdapterKeyring;
use maildeck_settings_adapter_fs::SettingsAdapterFs;

mod window_adapter;

use window_adapter::HeadlessWindowAdapter;

#[tokio::main]
async fn main() {
	let data_dir =
		PathBuf::from(env::var("MAILDECK_DATA_DIR").unwrap_or("./data".to_string()));

	let settings_adapter = SettingsAdapterFs::new(data_dir.join("settings.json"))
		.await
		.expect("FATAL: Cannot open settings store");
	let cache_adapter = CacheAdapterFs::new(data_dir.join("cache"))
		.await
		.expect("FATAL: Cannot open cache dir");

	let mut builder = AppBuilder::new();
	builder
		.listen(env::var("MAILDECK_LISTEN").unwrap_or("127.0.0.1:4420".to_string()))
		.settings_adapter(Arc::new(settings_adapter))
		.secret_adapter(Arc::new(SecretAdapterKeyring::new("maildeck")))
		.cache_adapter(Arc::new(cache_adapter))
		.window_adapter(Arc::new(HeadlessWindowAdapter));

	builder.run().await.expect("FATAL: Server error");
}

// vim: ts=4
