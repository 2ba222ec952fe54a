//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! - **`signup`** - POST /api/v1/signup - user registration
//! - **`signin`** - POST /api/v1/signin - credential verification, token issue

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

// Re-export handlers
pub use signin::signin;
pub use signup::signup;
