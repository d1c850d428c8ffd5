//! Credential security configuration
//!
//! Tunables for password key derivation, account lockout, and the
//! timing defenses applied by the authentication service.

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Security configuration for the credential verification core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// PBKDF2 iteration count for password key derivation
    ///
    /// The single tunable bounding per-verification CPU cost. Should
    /// stay at or above 100,000 outside of development.
    #[serde(default = "default_pbkdf2_iterations")]
    pub pbkdf2_iterations: u32,

    /// Consecutive failed attempts before an account is locked
    #[serde(default = "default_lockout_threshold")]
    pub lockout_threshold: u32,

    /// Duration in minutes for which an account remains locked
    #[serde(default = "default_lockout_duration_minutes")]
    pub lockout_duration_minutes: i64,

    /// Response-time floor in milliseconds applied when a login does
    /// not exist, so that absent and present accounts answer alike
    #[serde(default = "default_decoy_delay_ms")]
    pub decoy_delay_ms: u64,

    /// Minimum accepted password length at registration
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: default_pbkdf2_iterations(),
            lockout_threshold: default_lockout_threshold(),
            lockout_duration_minutes: default_lockout_duration_minutes(),
            decoy_delay_ms: default_decoy_delay_ms(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (cheap derivation for fast tests)
    pub fn development() -> Self {
        Self {
            pbkdf2_iterations: 10_000,
            ..Default::default()
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self::default()
    }

    /// Create configuration for the given environment
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }

    /// Load configuration from environment variables, falling back to
    /// the preset for the detected environment
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());

        if let Ok(iterations) = std::env::var("SECURITY_PBKDF2_ITERATIONS") {
            if let Ok(value) = iterations.parse() {
                config.pbkdf2_iterations = value;
            }
        }
        if let Ok(threshold) = std::env::var("SECURITY_LOCKOUT_THRESHOLD") {
            if let Ok(value) = threshold.parse() {
                config.lockout_threshold = value;
            }
        }
        if let Ok(minutes) = std::env::var("SECURITY_LOCKOUT_DURATION_MINUTES") {
            if let Ok(value) = minutes.parse() {
                config.lockout_duration_minutes = value;
            }
        }
        if let Ok(delay) = std::env::var("SECURITY_DECOY_DELAY_MS") {
            if let Ok(value) = delay.parse() {
                config.decoy_delay_ms = value;
            }
        }

        config
    }
}

fn default_pbkdf2_iterations() -> u32 {
    100_000
}

fn default_lockout_threshold() -> u32 {
    3
}

fn default_lockout_duration_minutes() -> i64 {
    15
}

fn default_decoy_delay_ms() -> u64 {
    100
}

fn default_min_password_length() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_config_default() {
        let config = SecurityConfig::default();
        assert_eq!(config.pbkdf2_iterations, 100_000);
        assert_eq!(config.lockout_threshold, 3);
        assert_eq!(config.lockout_duration_minutes, 15);
        assert_eq!(config.decoy_delay_ms, 100);
        assert_eq!(config.min_password_length, 6);
    }

    #[test]
    fn test_development_preset_is_cheaper() {
        let dev = SecurityConfig::development();
        let prod = SecurityConfig::production();
        assert!(dev.pbkdf2_iterations < prod.pbkdf2_iterations);
        // Lockout behavior is identical across environments
        assert_eq!(dev.lockout_threshold, prod.lockout_threshold);
        assert_eq!(dev.lockout_duration_minutes, prod.lockout_duration_minutes);
    }

    #[test]
    fn test_for_environment() {
        let config = SecurityConfig::for_environment(Environment::Production);
        assert_eq!(config.pbkdf2_iterations, 100_000);

        let config = SecurityConfig::for_environment(Environment::Development);
        assert_eq!(config.pbkdf2_iterations, 10_000);
    }

    #[test]
    fn test_from_env_honours_overrides() {
        std::env::set_var("ENVIRONMENT", "production");
        std::env::set_var("SECURITY_PBKDF2_ITERATIONS", "250000");
        std::env::set_var("SECURITY_LOCKOUT_THRESHOLD", "5");

        let config = SecurityConfig::from_env();
        assert_eq!(config.pbkdf2_iterations, 250_000);
        assert_eq!(config.lockout_threshold, 5);
        // Untouched fields keep the production preset
        assert_eq!(config.lockout_duration_minutes, 15);
        assert_eq!(config.decoy_delay_ms, 100);

        std::env::remove_var("ENVIRONMENT");
        std::env::remove_var("SECURITY_PBKDF2_ITERATIONS");
        std::env::remove_var("SECURITY_LOCKOUT_THRESHOLD");
    }
}
