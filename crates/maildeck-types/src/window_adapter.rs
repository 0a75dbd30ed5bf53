//! Adapter over the desktop window shell.
//!
//! Implementations back onto the native window in desktop mode; headless
//! deployments ship a no-op implementation and run in browser mode.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::settings::WindowSettings;

#[async_trait]
pub trait WindowAdapter: Debug + Send + Sync {
	/// Current geometry of the main window
	async fn size_position(&self) -> MdResult<WindowSettings>;

	/// Asks the shell to reload the main window
	async fn reload_main_window(&self) -> MdResult<()>;
}

// vim: ts=4
