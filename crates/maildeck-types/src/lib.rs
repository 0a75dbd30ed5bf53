//! Shared types, adapter traits, and error types for the Maildeck backend.
//!
//! This crate contains the settings document model and the adapter traits
//! the server consumes. Extracting these into a separate crate lets the
//! adapter implementations compile independently of the server.

#![forbid(unsafe_code)]

pub mod cache_adapter;
pub mod error;
pub mod prelude;
pub mod secret_adapter;
pub mod settings;
pub mod settings_adapter;
pub mod window_adapter;

// vim: ts=4
