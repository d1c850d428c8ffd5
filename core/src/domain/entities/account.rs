//! Account entity representing a registered credential holder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity holding credential material and lockout bookkeeping
///
/// The account is owned by the credential store; services mutate a copy
/// and ask the store to persist it. `version` is the optimistic
/// concurrency stamp the store compares on update, so two concurrent
/// failed attempts cannot silently lose an increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique login name (3-50 chars, alphanumeric/underscore)
    pub login: String,

    /// Unique email address
    pub email: String,

    /// Base64-encoded 32-byte derived password key
    pub password_hash: String,

    /// Base64-encoded 16-byte salt, generated once at creation
    pub salt: String,

    /// Consecutive failed verification attempts
    pub failed_attempts: u32,

    /// Whether a lock has been applied and not yet cleared
    pub is_locked: bool,

    /// Lock expiry; present iff `is_locked`. A lock whose expiry has
    /// passed reads as unlocked but is only cleared on the next
    /// successful verification.
    pub locked_until: Option<DateTime<Utc>>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Optimistic concurrency stamp, incremented by the store on update
    pub version: u64,
}

impl Account {
    /// Creates a new Account with freshly derived credential material
    pub fn new(
        login: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        salt: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            salt: salt.into(),
            failed_attempts: 0,
            is_locked: false,
            locked_until: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
            version: 0,
        }
    }

    /// Whether a lock is currently in effect
    ///
    /// An expired lock is inert: it answers false here while the stored
    /// flags remain set until the next successful verification.
    pub fn has_active_lock(&self) -> bool {
        self.is_locked && self.locked_until.map_or(false, |until| until > Utc::now())
    }

    /// Records one failed verification attempt
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.failed_attempts += 1;
        self.updated_at = Utc::now();
        self.failed_attempts
    }

    /// Applies a lock until the given time
    pub fn lock_until(&mut self, until: DateTime<Utc>) {
        self.is_locked = true;
        self.locked_until = Some(until);
        self.updated_at = Utc::now();
    }

    /// Records a successful verification, clearing counter and lock state
    pub fn record_successful_login(&mut self) {
        let now = Utc::now();
        self.failed_attempts = 0;
        self.is_locked = false;
        self.locked_until = None;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
