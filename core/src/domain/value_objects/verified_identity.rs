//! Verified identity value object produced by credential verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Account;

/// Identity of a successfully verified caller
///
/// This is the output an external token issuer consumes to mint an
/// opaque bearer credential. It intentionally excludes credential
/// material and lockout bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// Account identifier
    pub id: Uuid,

    /// Login name the caller authenticated with
    pub login: String,

    /// Email on record
    pub email: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for VerifiedIdentity {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            login: account.login.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}
