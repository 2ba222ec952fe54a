//! Middleware Module
//!
//! Request-processing middleware for the backend server.
//!
//! Currently contains the bearer-token authentication middleware that guards
//! all protected routes.

/// Bearer-token authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
