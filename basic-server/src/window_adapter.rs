//! Headless window adapter for browser-served deployments.
//!
//! There is no native window to measure or reload; geometry reads are a
//! wiring error (the server only asks for them in desktop mode) and reloads
//! are quiet no-ops.

use async_trait::async_trait;

use maildeck::prelude::*;
use maildeck::types::settings::WindowSettings;
use maildeck::types::window_adapter::WindowAdapter;

#[derive(Debug)]
pub struct HeadlessWindowAdapter;

#[async_trait]
impl WindowAdapter for HeadlessWindowAdapter {
	async fn size_position(&self) -> MdResult<WindowSettings> {
		Err(Error::ConfigError("No native window in browser mode".into()))
	}

	async fn reload_main_window(&self) -> MdResult<()> {
		debug!("reload_main_window: no native window");
		Ok(())
	}
}

// vim: ts=4
