//! Settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): API response shapes
//! - **Service** (`service.rs`): ordered pipelines behind each endpoint
//! - **Handler** (`handler.rs`): HTTP API endpoints
//!
//! The document model itself lives in `maildeck-types`, next to the adapter
//! traits, so the store implementations can share it.

pub mod handler;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// vim: ts=4
