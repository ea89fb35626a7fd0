//! bcrypt-backed [`PasswordHasher`].
//!
//! bcrypt is CPU bound, so hashing and verification run on the blocking
//! pool with the caller's trace identifier carried across.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{CredentialError, PasswordHasher};
use crate::domain::{PasswordDigest, TraceId};

/// Work factor used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Smallest cost bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Largest cost bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

/// bcrypt ignores input past this many bytes; longer passwords are refused.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hasher using bcrypt with a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given cost.
    ///
    /// # Errors
    /// Returns [`CredentialError::Rejected`] when `cost` is outside bcrypt's
    /// accepted range.
    pub fn new(cost: u32) -> Result<Self, CredentialError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(CredentialError::rejected(format!(
                "bcrypt cost {cost} outside {MIN_BCRYPT_COST}..={MAX_BCRYPT_COST}"
            )));
        }
        Ok(Self { cost })
    }

    /// Configured cost.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

async fn run_blocking<F, T>(work: F) -> Result<T, CredentialError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let trace_id = TraceId::current();
    tokio::task::spawn_blocking(move || TraceId::sync_scope(trace_id, work))
        .await
        .map_err(|err| CredentialError::worker(err.to_string()))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordDigest, CredentialError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialError::rejected(format!(
                "password longer than {MAX_PASSWORD_BYTES} bytes"
            )));
        }

        let cost = self.cost;
        let password = Zeroizing::new(password.to_owned());
        let digest = run_blocking(move || bcrypt::hash(password.as_bytes(), cost)).await?;
        digest
            .map(PasswordDigest::new)
            .map_err(|err| CredentialError::rejected(err.to_string()))
    }

    async fn verify(
        &self,
        digest: &PasswordDigest,
        password: &str,
    ) -> Result<bool, CredentialError> {
        let password = Zeroizing::new(password.to_owned());
        let digest = digest.as_str().to_owned();
        let outcome = run_blocking(move || bcrypt::verify(password.as_bytes(), &digest)).await?;
        Ok(outcome.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored password digest could not be parsed");
            false
        }))
    }
}
