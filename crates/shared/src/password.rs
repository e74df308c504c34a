//! Password hashing using Argon2id.
//!
//! Digests are PHC strings, so every digest carries its own salt and cost
//! parameters and can be verified after the configured costs change.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),
}

/// Length of the derived key in bytes.
const OUTPUT_LEN: usize = 32;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashingParams {
    /// OWASP 2024 recommendation: 19 MiB, 2 passes, 1 lane.
    fn default() -> Self {
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Hashes and verifies user credentials.
///
/// Holds no state beyond its cost parameters; cheap to clone and share.
#[derive(Clone)]
pub struct CredentialHasher {
    params: HashingParams,
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("params", &self.params)
            .finish()
    }
}

impl CredentialHasher {
    /// Creates a hasher, rejecting parameters Argon2 cannot work with.
    pub fn new(params: HashingParams) -> Result<Self, PasswordError> {
        let argon_params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            Some(OUTPUT_LEN),
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        Ok(Self {
            params,
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params),
        })
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Example
    /// ```
    /// use shared::password::{CredentialHasher, HashingParams};
    ///
    /// let hasher = CredentialHasher::new(HashingParams::default()).unwrap();
    /// let digest = hasher.hash("my_secure_password").unwrap();
    /// assert!(digest.starts_with("$argon2id$"));
    /// ```
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Checks a plaintext attempt against a stored digest in constant time.
    ///
    /// A mismatch is `Ok(false)`; only a malformed digest is an error.
    pub fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest).map_err(|_| PasswordError::InvalidHashFormat)?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerifyError(e.to_string())),
        }
    }
}
