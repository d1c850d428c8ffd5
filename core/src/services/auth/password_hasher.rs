//! Salted password key derivation and verification
//!
//! PBKDF2 with HMAC-SHA-256 as the PRF. The iteration count comes from
//! configuration and is the single tunable bounding per-call CPU cost.
//! Derivation is CPU-bound; callers run it off the async runtime via a
//! blocking worker (see the authentication service).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use constant_time_eq::constant_time_eq;
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;

use crate::errors::{DomainError, DomainResult};

/// Salt length in bytes before encoding
pub const SALT_LENGTH: usize = 16;

/// Derived key length in bytes before encoding
pub const HASH_LENGTH: usize = 32;

/// Password hasher with a configured derivation cost
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given PBKDF2 iteration count
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Generate a fresh random salt, base64-encoded for storage
    ///
    /// Uses OsRng (OS-provided CSPRNG). Each account gets exactly one
    /// salt, at creation.
    pub fn generate_salt(&self) -> String {
        let mut salt = [0u8; SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        BASE64.encode(salt)
    }

    /// Derive the storage encoding of a password under the given salt
    pub fn derive_hash(&self, password: &str, salt: &str) -> DomainResult<String> {
        let salt_bytes = BASE64.decode(salt).map_err(|e| DomainError::Internal {
            message: format!("Stored salt is not valid base64: {}", e),
        })?;

        let mut key = [0u8; HASH_LENGTH];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt_bytes, self.iterations, &mut key);

        Ok(BASE64.encode(key))
    }

    /// Whether the presented password derives to the stored hash
    ///
    /// Comparison is constant-time over the decoded key bytes so the
    /// verdict leaks no prefix information through timing.
    pub fn verify(&self, password: &str, salt: &str, stored_hash: &str) -> DomainResult<bool> {
        let stored_bytes = BASE64.decode(stored_hash).map_err(|e| DomainError::Internal {
            message: format!("Stored hash is not valid base64: {}", e),
        })?;

        let salt_bytes = BASE64.decode(salt).map_err(|e| DomainError::Internal {
            message: format!("Stored salt is not valid base64: {}", e),
        })?;

        let mut derived = [0u8; HASH_LENGTH];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt_bytes, self.iterations, &mut derived);

        Ok(constant_time_eq(&derived, &stored_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        // Low cost keeps the suite fast; production uses 100k+
        PasswordHasher::new(1_000)
    }

    #[test]
    fn test_salt_is_16_bytes_and_unique() {
        let hasher = hasher();
        let first = hasher.generate_salt();
        let second = hasher.generate_salt();

        assert_eq!(BASE64.decode(&first).unwrap().len(), SALT_LENGTH);
        assert_ne!(first, second);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let hasher = hasher();
        let salt = hasher.generate_salt();

        let first = hasher.derive_hash("correct horse", &salt).unwrap();
        let second = hasher.derive_hash("correct horse", &salt).unwrap();
        assert_eq!(first, second);
        assert_eq!(BASE64.decode(&first).unwrap().len(), HASH_LENGTH);
    }

    #[test]
    fn test_distinct_salts_give_distinct_hashes() {
        let hasher = hasher();
        let first = hasher.derive_hash("same password", &hasher.generate_salt()).unwrap();
        let second = hasher.derive_hash("same password", &hasher.generate_salt()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_roundtrip() {
        let hasher = hasher();
        let salt = hasher.generate_salt();
        let hash = hasher.derive_hash("s3cret!", &salt).unwrap();

        assert!(hasher.verify("s3cret!", &salt, &hash).unwrap());
        assert!(!hasher.verify("s3cret", &salt, &hash).unwrap());
        assert!(!hasher.verify("", &salt, &hash).unwrap());
    }

    #[test]
    fn test_iteration_count_changes_hash() {
        let salt = hasher().generate_salt();
        let cheap = PasswordHasher::new(1_000).derive_hash("pw", &salt).unwrap();
        let costly = PasswordHasher::new(2_000).derive_hash("pw", &salt).unwrap();
        assert_ne!(cheap, costly);
    }

    #[test]
    fn test_corrupt_storage_is_an_internal_error() {
        let hasher = hasher();
        let result = hasher.verify("pw", "not base64!!", "also not base64!!");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
