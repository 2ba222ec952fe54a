//! Route Configuration Module
//!
//! Assembles all HTTP routes for the backend server.
//!
//! # Routes
//!
//! Public:
//! - `POST /api/v1/signup` - user registration
//! - `POST /api/v1/signin` - credential verification, token issue
//! - `GET /api/v1/brain/{token}` - shared collection view
//!
//! Protected (bearer token, via auth middleware):
//! - `POST /api/v1/content` - create content
//! - `GET /api/v1/content` - list the caller's content
//! - `DELETE /api/v1/content/{id}` - delete a record
//! - `POST /api/v1/brain/share` - toggle sharing

/// Main router creation
pub mod router;

pub use router::create_router;
