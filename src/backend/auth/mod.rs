//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! stateless session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - Credential store (user rows, bcrypt hashes)
//! ├── sessions.rs     - JWT token issuance and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /api/v1/signup
//!     └── signin.rs   - POST /api/v1/signin
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password validated -> bcrypt hash stored
//! 2. **Signin**: credentials verified -> signed token (5 hour expiry)
//! 3. **Protected request**: bearer token verified statelessly, no session
//!    table; revocation before natural expiry is not supported
//!
//! # Security
//!
//! - Passwords hashed with bcrypt (random per-record salt)
//! - Unknown username and wrong password return the same 401

/// Credential store and user queries
pub mod users;

/// JWT token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthCredentials, SigninResponse};
pub use handlers::{signin, signup};
pub use sessions::{Claims, SessionKeys};
pub use users::User;
