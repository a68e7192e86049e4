//! Credential manager - one-way password hashing and verification.
//!
//! Hashes are Argon2id PHC strings; the salt and cost are embedded in the
//! string, so verification needs nothing but the stored hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Argon2 cost parameters. Fixed for the lifetime of a hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashCost {
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Hashed password value object.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Wrap an existing hash (from storage).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed hash is a mismatch, not an error.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        // Cost parameters are read back from the hash itself.
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

/// Hashing seam used by admission.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash a raw password. Fails only on an internal fault.
    fn hash(&self, raw: &str) -> DomainResult<Password>;

    /// Compare a candidate against a stored hash in constant time.
    fn verify(&self, password: &Password, candidate: &str) -> bool;
}

/// Argon2id hasher with a fixed cost.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Build a hasher, rejecting cost parameters Argon2 cannot use.
    pub fn new(cost: HashCost) -> DomainResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| DomainError::hashing(format!("invalid hash cost: {}", e)))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, raw: &str) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| DomainError::hashing(e.to_string()))?;
        Ok(Password::from_hash(hash.to_string()))
    }

    fn verify(&self, password: &Password, candidate: &str) -> bool {
        password.verify(candidate)
    }
}

/// Verify a candidate against a stored hash string.
pub fn verify_credential(stored_hash: &str, candidate: &str) -> bool {
    Password::from_hash(stored_hash.to_string()).verify(candidate)
}
