//! Backend Module
//!
//! This module contains all server-side code for the Mind Vault application.
//! It provides a complete Axum HTTP server backed by PostgreSQL.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, JWT session tokens
//! - **`content`** - Content store, tag store, and content handlers
//! - **`share`** - Share-link store and public brain view
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Request Flow
//!
//! Client -> router -> (auth middleware for protected routes) -> handler ->
//! store -> JSON response. Each request is handled independently; the only
//! process-wide state is the signing key (read-only after startup) and the
//! database connection pool.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. Validation and authentication
//! failures are detected before any mutation. Unexpected store failures are
//! logged with detail and surface as opaque 500 responses.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Content and tag stores
pub mod content;

/// Share links and the public brain view
pub mod share;

/// Request middleware
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
