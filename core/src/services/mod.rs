//! Business services containing domain logic and use cases.

pub mod auth;
pub mod security;

// Re-export commonly used types
pub use auth::{
    AuthService, AuthServiceConfig, DecoyDelayService, LockoutPolicy, PasswordHasher,
};
pub use security::{looks_like_injection, sanitize, validate_login};
