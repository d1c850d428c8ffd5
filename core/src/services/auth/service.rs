//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::account::Account;
use crate::domain::value_objects::VerifiedIdentity;
use crate::errors::{AuthError, DomainError, DomainResult, SecurityError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::security::{looks_like_injection, validate_email, validate_login};

use super::config::AuthServiceConfig;
use super::decoy_delay::{DecoyDelayConfig, DecoyDelayService};
use super::lockout::{LockState, LockoutConfig, LockoutPolicy};
use super::password_hasher::PasswordHasher;

/// Authentication service orchestrating credential verification
///
/// Raw fields pass through whitelist validation and injection screening
/// before any store or comparison logic runs. The store is the only
/// shared mutable resource; its `update` is a compare-and-swap, and a
/// lost race is replayed once against fresh state.
pub struct AuthService<R>
where
    R: AccountRepository,
{
    /// Account repository for credential store operations
    account_repository: Arc<R>,
    /// Password key derivation and verification
    password_hasher: PasswordHasher,
    /// Lockout state machine
    lockout_policy: LockoutPolicy,
    /// Response-time floor for absent accounts
    decoy_delay: DecoyDelayService,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<R> AuthService<R>
where
    R: AccountRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account persistence
    /// * `config` - Service configuration
    pub fn new(account_repository: Arc<R>, config: AuthServiceConfig) -> Self {
        let password_hasher = PasswordHasher::new(config.pbkdf2_iterations());
        let lockout_policy = LockoutPolicy::new(LockoutConfig {
            max_failed_attempts: config.security.lockout_threshold,
            lock_duration_minutes: config.security.lockout_duration_minutes,
        });
        let decoy_delay = DecoyDelayService::new(DecoyDelayConfig {
            delay_ms: config.security.decoy_delay_ms,
        });

        Self {
            account_repository,
            password_hasher,
            lockout_policy,
            decoy_delay,
            config,
        }
    }

    /// Verify a login/password pair
    ///
    /// This method:
    /// 1. Rejects malformed logins before anything else runs
    /// 2. Rejects injection-style payloads in either field, logging a
    ///    security event without revealing which field triggered it
    /// 3. Answers absent accounts behind a fixed decoy delay
    /// 4. Rejects attempts against an actively locked account outright
    /// 5. Derives and compares the password hash off the async runtime
    /// 6. Counts failures, locking at the threshold, and persists
    /// 7. Resets counters and lock state on success
    ///
    /// # Returns
    ///
    /// * `Ok(VerifiedIdentity)` - Identity for the token issuer to consume
    /// * `Err(DomainError)` - Validation, security, or authentication failure
    pub async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> DomainResult<VerifiedIdentity> {
        // Step 1: whitelist validation of the login field
        if !validate_login(login) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidFormat {
                field: "login".to_string(),
            }));
        }

        // Step 2: injection screening on both fields. The log entry
        // stays silent about which field matched.
        if looks_like_injection(login) || looks_like_injection(password) {
            warn!(
                login = %mask_login(login),
                "Injection-style payload rejected during login"
            );
            return Err(DomainError::Security(SecurityError::InjectionAttempt));
        }

        // Steps 3-7 read and write the shared account record. A store
        // conflict means a concurrent attempt won the write; replay the
        // decision once against fresh state before giving up.
        match self.attempt_verification(login, password).await {
            Err(DomainError::Conflict { .. }) => {
                match self.attempt_verification(login, password).await {
                    Err(DomainError::Conflict { resource }) => Err(DomainError::Internal {
                        message: format!("Persistent update conflict on {}", resource),
                    }),
                    other => other,
                }
            }
            other => other,
        }
    }

    /// Register a new account
    ///
    /// Validates field formats and password length, checks login/email
    /// uniqueness, then derives the credential material (fresh salt,
    /// salted hash) off the async runtime and persists the account.
    pub async fn register(
        &self,
        login: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        if !self.config.allow_registration {
            return Err(DomainError::Auth(AuthError::RegistrationDisabled));
        }

        if !validate_login(login) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidFormat {
                field: "login".to_string(),
            }));
        }

        if !validate_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }

        let min_length = self.config.min_password_length();
        if password.chars().count() < min_length {
            return Err(DomainError::ValidationErr(ValidationError::InvalidLength {
                field: "password".to_string(),
                expected: min_length,
                actual: password.chars().count(),
            }));
        }

        if self.account_repository.exists_by_login(login).await? {
            return Err(DomainError::Auth(AuthError::LoginAlreadyExists));
        }

        if self.account_repository.exists_by_email(email).await? {
            return Err(DomainError::Auth(AuthError::EmailAlreadyExists));
        }

        let (password_hash, salt) = self.derive_fresh_credential(password).await?;

        let account = Account::new(login, email, password_hash, salt);
        let created = self.account_repository.create(account).await?;

        info!(login = %mask_login(login), "Account registered");

        Ok(created)
    }

    /// One full verification decision against current store state
    async fn attempt_verification(
        &self,
        login: &str,
        password: &str,
    ) -> DomainResult<VerifiedIdentity> {
        // Step 3: lookup; absent accounts answer behind the decoy delay
        // so their latency matches a wrong-password response
        let Some(mut account) = self.account_repository.find_by_login(login).await? else {
            self.decoy_delay.apply().await;
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        };

        // Step 4: an active lock rejects before any hash computation
        // and without touching the failure counter
        if let LockState::Locked { until } = self.lockout_policy.check(&account) {
            return Err(DomainError::Auth(AuthError::AccountLocked { until }));
        }

        // Step 5: constant-time comparison of the derived hash
        let password_matches = self.compare_password(password, &account).await?;

        if !password_matches {
            // Step 6: count the failure, lock at the threshold, persist
            let outcome = self.lockout_policy.record_failure(&mut account);
            self.account_repository.update(account).await?;

            warn!(
                login = %mask_login(login),
                attempts = outcome.attempts,
                locked = outcome.locked,
                "Failed authentication attempt recorded"
            );

            // The response body stays generic regardless of the outcome
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 7: full reset on success
        self.lockout_policy.record_success(&mut account);
        let account = self.account_repository.update(account).await?;

        info!(login = %mask_login(login), "Authentication succeeded");

        Ok(VerifiedIdentity::from(&account))
    }

    /// Run the CPU-bound hash comparison on a blocking worker
    async fn compare_password(&self, password: &str, account: &Account) -> DomainResult<bool> {
        let hasher = self.password_hasher.clone();
        let password = password.to_string();
        let salt = account.salt.clone();
        let stored_hash = account.password_hash.clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &salt, &stored_hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hash verification worker failed: {}", e),
            })?
    }

    /// Generate a fresh salt and derive the hash on a blocking worker
    async fn derive_fresh_credential(&self, password: &str) -> DomainResult<(String, String)> {
        let hasher = self.password_hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || {
            let salt = hasher.generate_salt();
            let hash = hasher.derive_hash(&password, &salt)?;
            Ok((hash, salt))
        })
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Hash derivation worker failed: {}", e),
        })?
    }
}

/// Mask a login for logging (show only the first two characters)
fn mask_login(login: &str) -> String {
    if login.len() <= 2 {
        return "*".repeat(login.len());
    }
    let prefix: String = login.chars().take(2).collect();
    format!("{}***", prefix)
}
