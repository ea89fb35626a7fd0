//! Credential policy: signup and login.
//!
//! Login collapses every credential failure (unknown user, user without a
//! password, wrong password) into one `AuthenticationFailed` error so callers
//! cannot tell which names exist. Accounts without a usable digest are still
//! checked against a placeholder digest, so every failure costs one bcrypt
//! verification. Store failures stay internal errors.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use crate::domain::ports::{
    AUTHENTICATION_FAILED_MESSAGE, CredentialError, LoginService, PasswordHasher, SignupService,
    UserRepository,
};
use crate::domain::user_service::{USER_EXISTS_MESSAGE, map_user_persistence_error};
use crate::domain::{Age, Credentials, Error, NewUser, PasswordDigest, User};

const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";
const PLACEHOLDER_PASSWORD: &str = "placeholder password for absent accounts";

/// Authentication service implementing [`LoginService`] and [`SignupService`].
#[derive(Clone)]
pub struct AuthService<R, H> {
    repo: Arc<R>,
    hasher: Arc<H>,
    placeholder: Arc<OnceLock<PasswordDigest>>,
}

impl<R, H> AuthService<R, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(repo: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            repo,
            hasher,
            placeholder: Arc::new(OnceLock::new()),
        }
    }
}

impl<R, H> AuthService<R, H>
where
    H: PasswordHasher,
{
    /// Spend one verification on a placeholder digest hashed at the
    /// configured cost. The digest is computed on first use and reused.
    async fn verify_placeholder(&self, password: &str) {
        let digest = match self.placeholder.get() {
            Some(digest) => digest.clone(),
            None => match self.hasher.hash(PLACEHOLDER_PASSWORD).await {
                Ok(digest) => self.placeholder.get_or_init(|| digest).clone(),
                Err(err) => {
                    tracing::warn!(error = %err, "placeholder digest unavailable");
                    return;
                }
            },
        };
        if let Err(err) = self.hasher.verify(&digest, password).await {
            tracing::warn!(error = %err, "placeholder verification failed");
        }
    }
}

fn map_credential_error(error: CredentialError) -> Error {
    match error {
        CredentialError::Rejected { message } => {
            tracing::debug!(%message, "password rejected by hasher");
            Error::internal(INVALID_PASSWORD_MESSAGE).with_public_message()
        }
        CredentialError::Worker { message } => {
            Error::internal(format!("password hashing failed: {message}"))
        }
    }
}

fn authentication_failed() -> Error {
    Error::authentication_failed(AUTHENTICATION_FAILED_MESSAGE)
}

#[async_trait]
impl<R, H> SignupService for AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn signup(&self, credentials: &Credentials) -> Result<User, Error> {
        let existing = self
            .repo
            .find_account_by_name(credentials.name())
            .await
            .map_err(map_user_persistence_error)?;
        if existing.is_some() {
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let digest = self
            .hasher
            .hash(credentials.password())
            .await
            .map_err(map_credential_error)?;
        let new_user =
            NewUser::new(credentials.name().clone(), Age::default()).with_password_digest(digest);
        let user = self
            .repo
            .insert(&new_user)
            .await
            .map_err(map_user_persistence_error)?;
        tracing::info!(user_id = %user.id(), "user signed up");
        Ok(user)
    }
}

#[async_trait]
impl<R, H> LoginService for AuthService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn login(&self, credentials: &Credentials) -> Result<User, Error> {
        let Some(account) = self
            .repo
            .find_account_by_name(credentials.name())
            .await
            .map_err(map_user_persistence_error)?
        else {
            self.verify_placeholder(credentials.password()).await;
            tracing::debug!("login rejected: unknown user");
            return Err(authentication_failed());
        };

        let Some(digest) = account.password_digest.as_ref() else {
            self.verify_placeholder(credentials.password()).await;
            tracing::debug!(user_id = %account.user.id(), "login rejected: no password set");
            return Err(authentication_failed());
        };

        let verified = self
            .hasher
            .verify(digest, credentials.password())
            .await
            .map_err(map_credential_error)?;
        if !verified {
            tracing::debug!(user_id = %account.user.id(), "login rejected: password mismatch");
            return Err(authentication_failed());
        }

        Ok(account.user)
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
