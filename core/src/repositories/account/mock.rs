//! Mock implementation of AccountRepository for testing
//!
//! In-memory reference implementation of the store contract, including
//! the compare-and-swap semantics of `update`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Mock account repository for testing
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-seeded with an account
    pub async fn with_existing_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.write().await.insert(account.id, account);
        repo
    }

    /// Overwrite an account unconditionally, for test state setup
    pub async fn put(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.login == login).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.login == account.login) {
            return Err(DomainError::Validation {
                message: "Login already registered".to_string(),
            });
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, mut account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let stored = accounts.get(&account.id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        // Compare-and-swap on the version stamp
        if stored.version != account.version {
            return Err(DomainError::Conflict {
                resource: "Account".to_string(),
            });
        }

        account.version += 1;
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn exists_by_login(&self, login: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.login == login))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(login: &str, email: &str) -> Account {
        Account::new(login, email, "aGFzaA==", "c2FsdA==")
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let repo = MockAccountRepository::new();
        repo.create(account("ana_c", "ana@example.com")).await.unwrap();

        let dup_login = repo.create(account("ana_c", "other@example.com")).await;
        assert!(matches!(dup_login, Err(DomainError::Validation { .. })));

        let dup_email = repo.create(account("other", "ana@example.com")).await;
        assert!(matches!(dup_email, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("ana_c", "ana@example.com")).await.unwrap();
        assert_eq!(created.version, 0);

        let updated = repo.update(created).await.unwrap();
        assert_eq!(updated.version, 1);
    }

    #[tokio::test]
    async fn test_stale_update_conflicts() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("ana_c", "ana@example.com")).await.unwrap();

        // Two readers take the same snapshot
        let first = repo.find_by_login("ana_c").await.unwrap().unwrap();
        let second = repo.find_by_login("ana_c").await.unwrap().unwrap();

        repo.update(first).await.unwrap();
        let stale = repo.update(second).await;
        assert!(matches!(stale, Err(DomainError::Conflict { .. })));

        // The first write survived
        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.version, 1);
    }
}
