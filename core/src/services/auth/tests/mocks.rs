//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, MockAccountRepository};

/// Repository wrapper that forces a number of update conflicts before
/// delegating, to exercise the service's conflict replay
pub struct ConflictingAccountRepository {
    pub inner: Arc<MockAccountRepository>,
    conflicts_remaining: AtomicU32,
}

impl ConflictingAccountRepository {
    pub fn new(inner: Arc<MockAccountRepository>, conflicts: u32) -> Self {
        Self {
            inner,
            conflicts_remaining: AtomicU32::new(conflicts),
        }
    }
}

#[async_trait]
impl AccountRepository for ConflictingAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_login(login).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        self.inner.create(account).await
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let remaining = self.conflicts_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.conflicts_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(DomainError::Conflict {
                resource: "Account".to_string(),
            });
        }
        self.inner.update(account).await
    }

    async fn exists_by_login(&self, login: &str) -> Result<bool, DomainError> {
        self.inner.exists_by_login(login).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.inner.exists_by_email(email).await
    }
}

/// Repository whose reads fail, to exercise internal error propagation
pub struct UnavailableAccountRepository;

#[async_trait]
impl AccountRepository for UnavailableAccountRepository {
    async fn find_by_login(&self, _login: &str) -> Result<Option<Account>, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }

    async fn create(&self, _account: Account) -> Result<Account, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }

    async fn update(&self, _account: Account) -> Result<Account, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }

    async fn exists_by_login(&self, _login: &str) -> Result<bool, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }

    async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> {
        Err(DomainError::Internal {
            message: "store unavailable".to_string(),
        })
    }
}
