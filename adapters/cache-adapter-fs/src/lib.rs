//! On-disk folder cache for Maildeck.
//!
//! Cached folder and message data lives under a single cache directory.
//! Busting drops the whole directory and recreates it empty; the mail
//! subsystems repopulate it lazily on the next sync.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use maildeck::cache_adapter::CacheAdapter;
use maildeck::prelude::*;

#[derive(Debug)]
pub struct CacheAdapterFs {
	cache_dir: Box<Path>,
}

impl CacheAdapterFs {
	pub async fn new(cache_dir: impl Into<PathBuf>) -> MdResult<Self> {
		let cache_dir: PathBuf = cache_dir.into();
		fs::create_dir_all(&cache_dir).await?;
		Ok(Self { cache_dir: cache_dir.into() })
	}

	pub fn cache_dir(&self) -> &Path {
		&self.cache_dir
	}
}

#[async_trait]
impl CacheAdapter for CacheAdapterFs {
	async fn bust_all(&self) -> MdResult<()> {
		info!("Busting caches under {:?}", self.cache_dir);

		match fs::remove_dir_all(&self.cache_dir).await {
			Ok(()) => {}
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
			Err(err) => {
				warn!("Cannot remove cache dir {:?}: {}", self.cache_dir, err);
				return Err(Error::StoreUnavailable);
			}
		}

		fs::create_dir_all(&self.cache_dir).await?;
		Ok(())
	}
}


// vim: ts=4
