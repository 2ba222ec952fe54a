//! Content Module
//!
//! Typed content records (documents, tweets, YouTube links, generic links)
//! with free-form tags.
//!
//! # Module Structure
//!
//! ```text
//! content/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - ContentType enum, request/response types
//! ├── tags.rs     - Tag store (get-or-create with retry-on-conflict)
//! ├── db.rs       - Content store queries
//! └── handlers.rs - HTTP handlers (create, list, delete)
//! ```
//!
//! # Ownership
//!
//! Content belongs to exactly one user, fixed at creation. Listing and
//! deletion are always owner-scoped; a delete for a row owned by someone
//! else is indistinguishable from a delete for a row that does not exist.

/// ContentType enum and request/response types
pub mod types;

/// Tag store
pub mod tags;

/// Content store queries
pub mod db;

/// HTTP handlers for content endpoints
pub mod handlers;

pub use handlers::{create_content, delete_content, list_content};
pub use types::{ContentItem, ContentType};
