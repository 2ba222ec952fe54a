//! Share Module
//!
//! Opaque share links: a user may publish a read-only snapshot of their
//! collection. The presence of a `share_links` row is the sole on/off
//! switch; anyone holding the token can fetch that user's content without
//! authenticating.
//!
//! # Module Structure
//!
//! ```text
//! share/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Share-link store (enable, disable, resolve)
//! └── handlers.rs - HTTP handlers (toggle, public brain view)
//! ```

/// Share-link store
pub mod db;

/// HTTP handlers for share endpoints
pub mod handlers;

pub use db::ShareLink;
pub use handlers::{toggle_sharing, view_brain};
