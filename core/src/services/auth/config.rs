//! Configuration for the authentication service

use cg_shared::config::security::SecurityConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Security configuration (derivation cost, lockout, timing)
    pub security: SecurityConfig,
    /// Whether to allow registration of new accounts
    pub allow_registration: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            security: SecurityConfig::default(),
            allow_registration: true,
        }
    }
}

impl AuthServiceConfig {
    /// Configuration with development security presets (cheap hashing)
    pub fn development() -> Self {
        Self {
            security: SecurityConfig::development(),
            allow_registration: true,
        }
    }

    /// Get the PBKDF2 iteration count
    pub fn pbkdf2_iterations(&self) -> u32 {
        self.security.pbkdf2_iterations
    }

    /// Get the minimum accepted password length
    pub fn min_password_length(&self) -> usize {
        self.security.min_password_length
    }
}
