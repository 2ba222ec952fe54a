//! Backend Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers and the
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - malformed/missing input (400), enumerates violated fields
//! - `Conflict` - duplicate username (400)
//! - `InvalidCredentials` - signin failure, identity-hiding (401)
//! - `MissingToken` - no/malformed Authorization header (401)
//! - `InvalidToken` - signature mismatch or expired token (403)
//! - `NotFound` - absent resource or not owned by caller, identity-hiding (404)
//! - `Internal` - unexpected store/infra failure (500, opaque body)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, FieldViolation};
