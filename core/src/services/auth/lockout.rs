//! Account lockout policy for brute force protection
//!
//! Failure counting and the lock/unlock state machine. Accounts cycle
//! between active and locked for their whole life; there is no
//! background timer. An expired lock is inert for decision purposes but
//! its stored flags are only cleared by the next successful
//! verification.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::domain::entities::account::Account;

/// Configuration for the lockout policy
#[derive(Debug, Clone)]
pub struct LockoutConfig {
    /// Consecutive failed attempts before locking (default: 3)
    pub max_failed_attempts: u32,
    /// Duration in minutes for which an account remains locked (default: 15)
    pub lock_duration_minutes: i64,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 3,
            lock_duration_minutes: 15,
        }
    }
}

/// Observable lock state of an account for the current attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockState {
    /// Attempts may proceed
    Active,
    /// Attempts are rejected until the given time
    Locked { until: DateTime<Utc> },
}

/// Result of recording a failed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureOutcome {
    /// Failure counter after the increment
    pub attempts: u32,
    /// Whether this failure applied a lock
    pub locked: bool,
}

/// Policy applying the lockout state machine to accounts
#[derive(Debug, Clone)]
pub struct LockoutPolicy {
    config: LockoutConfig,
}

impl LockoutPolicy {
    /// Create a new lockout policy
    pub fn new(config: LockoutConfig) -> Self {
        Self { config }
    }

    /// Create a policy with default configuration
    pub fn with_defaults() -> Self {
        Self::new(LockoutConfig::default())
    }

    /// Current lock state of the account
    ///
    /// A lock whose expiry has passed answers `Active` without mutating
    /// the account; the stale flags persist until a successful
    /// verification clears them.
    pub fn check(&self, account: &Account) -> LockState {
        if account.has_active_lock() {
            // has_active_lock implies locked_until is set
            if let Some(until) = account.locked_until {
                return LockState::Locked { until };
            }
        }
        LockState::Active
    }

    /// Record a failed attempt, locking when the threshold is crossed
    ///
    /// Must only be called while the account is not currently locked
    /// (an active lock rejects the attempt before any counting). When a
    /// stale expired lock is present, counting continues from the stale
    /// value, so the next failure at or past the threshold re-locks.
    pub fn record_failure(&self, account: &mut Account) -> FailureOutcome {
        let attempts = account.record_failed_attempt();

        if attempts >= self.config.max_failed_attempts {
            let until = Utc::now() + Duration::minutes(self.config.lock_duration_minutes);
            account.lock_until(until);

            warn!(
                login = %account.login,
                attempts = attempts,
                lock_duration_minutes = self.config.lock_duration_minutes,
                "Account locked due to failed authentication attempts"
            );

            FailureOutcome {
                attempts,
                locked: true,
            }
        } else {
            FailureOutcome {
                attempts,
                locked: false,
            }
        }
    }

    /// Record a successful verification: full reset of counter and lock
    pub fn record_success(&self, account: &mut Account) {
        account.record_successful_login();
    }
}
