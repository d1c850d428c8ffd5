//! Authentication service module
//!
//! This module provides the credential verification core:
//! - Salted PBKDF2 password hashing and constant-time verification
//! - Account lockout after repeated failures
//! - Decoy delay against username enumeration via timing
//! - Registration and login verification orchestration

mod config;
mod decoy_delay;
mod lockout;
mod password_hasher;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use decoy_delay::{DecoyDelayConfig, DecoyDelayService};
pub use lockout::{FailureOutcome, LockState, LockoutConfig, LockoutPolicy};
pub use password_hasher::{PasswordHasher, HASH_LENGTH, SALT_LENGTH};
pub use service::AuthService;
