//! Client Module
//!
//! Typed API client for the Mind Vault server, used by the `mindvault` CLI
//! binary. The session token is stored locally in `~/.mindvault/token` and
//! attached as a bearer header on protected calls.

/// Typed HTTP client and token persistence
pub mod api;

pub use api::{ClientError, VaultClient};
