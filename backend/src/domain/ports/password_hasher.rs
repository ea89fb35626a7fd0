//! Driven port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordDigest;

use super::define_port_error;

define_port_error! {
    /// Failures raised while hashing or verifying a password.
    pub enum CredentialError {
        /// The password cannot be hashed (for example it is too long).
        Rejected { message: String } => "password rejected: {message}",
        /// The hashing worker failed before producing a result.
        Worker { message: String } => "password hashing worker failed: {message}",
    }
}

/// Salted one-way hashing of user passwords.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest for `password`.
    async fn hash(&self, password: &str) -> Result<PasswordDigest, CredentialError>;

    /// Check `password` against a stored digest.
    ///
    /// A mismatch, or a digest the adapter cannot parse, yields `Ok(false)`.
    async fn verify(
        &self,
        digest: &PasswordDigest,
        password: &str,
    ) -> Result<bool, CredentialError>;
}
