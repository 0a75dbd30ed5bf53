//! Adapter over the derived folder/message cache.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[async_trait]
pub trait CacheAdapter: Debug + Send + Sync {
	/// Drops all cached folder and message data
	async fn bust_all(&self) -> MdResult<()>;
}

// vim: ts=4
