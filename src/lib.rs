//! Mind Vault
//!
//! A personal bookmark/note aggregator. Users register, authenticate, and
//! store typed content references (documents, tweets, YouTube links, generic
//! links) tagged with free-form labels, and may publish a read-only shareable
//! snapshot of their collection via an opaque link.
//!
//! The crate ships two binaries:
//!
//! - `mindvault-server` - the Axum HTTP server (`src/backend/main.rs`)
//! - `mindvault` - a thin CLI client (`src/client/main.rs`)
//!
//! # Architecture
//!
//! - **`backend`** - HTTP server: routes, handlers, stores, auth, errors
//! - **`client`** - typed API client used by the CLI

/// Server-side code: HTTP handlers, stores, authentication
pub mod backend;

/// API client used by the `mindvault` CLI
pub mod client;
