//! Account repository trait defining the interface for credential persistence.
//!
//! This module defines the repository pattern interface for Account
//! entities. The trait is async-first and uses Result types for proper
//! error handling. Implementations must guarantee fully parameterized
//! access to the underlying store; input screening in the service layer
//! is defense in depth, never the query-safety boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// `update` is a compare-and-swap on the account's `version` stamp:
/// the write succeeds only when the stored stamp still matches the one
/// the caller read, so concurrent failure-counter increments cannot
/// silently overwrite each other.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its exact login
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given login
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account in the store
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate login/email)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account, conditional on its version stamp
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account with the incremented stamp
    /// * `Err(DomainError::Conflict)` - The stored version no longer
    ///   matches; the caller must re-read and retry its decision
    /// * `Err(DomainError::NotFound)` - No such account
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether an account exists with the given login
    async fn exists_by_login(&self, login: &str) -> Result<bool, DomainError>;

    /// Check whether an account exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
