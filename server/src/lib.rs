//! Maildeck is the local HTTP backend of the Maildeck email client.
//!
//! The client UI talks to this service for everything that touches
//! persisted state:
//!
//! - reading and writing the settings document (accounts, system options,
//!   window geometry)
//! - routing account passwords to the platform secret store, so they never
//!   land in the settings file
//! - busting derived folder caches and asking the desktop shell to reload
//!   the main window
//!
//! The stores behind these operations are injected as adapter traits (see
//! `maildeck-types`); the `adapters/` crates in this workspace provide the
//! filesystem and keyring implementations.

#![forbid(unsafe_code)]

pub mod accounts;
pub mod core;
pub mod prelude;
pub mod routes;
pub mod settings;

pub use maildeck_types as types;

pub use crate::core::app::{App, AppBuilder, RunMode};

// vim: ts=4
