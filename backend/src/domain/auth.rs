//! Authentication primitives: credentials and password digests.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::UserName;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Name was missing or blank once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated name/password pair used by signup and login.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `password` is non-empty and kept verbatim, whitespace included.
///
/// # Examples
/// ```
/// use backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("alice", "s3cret").unwrap();
/// assert_eq!(creds.name().as_ref(), "alice");
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    name: UserName,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw name/password inputs.
    pub fn try_from_parts(name: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        if name.trim().is_empty() {
            return Err(CredentialsValidationError::EmptyName);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            name: UserName::new(name),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Name used for the user lookup.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque one-way password digest as stored in the users table.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap a digest string produced by a [`crate::domain::ports::PasswordHasher`].
    #[must_use]
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialsValidationError::EmptyName)]
    #[case("   ", "pw", CredentialsValidationError::EmptyName)]
    #[case("user", "", CredentialsValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] name: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        let err = Credentials::try_from_parts(name, password).expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("alice", " padded password ")]
    #[case("山田", "correct horse battery staple")]
    fn valid_credentials_keep_inputs(#[case] name: &str, #[case] password: &str) {
        let creds = Credentials::try_from_parts(name, password).expect("valid inputs");
        assert_eq!(creds.name().as_ref(), name);
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn debug_output_redacts_secrets() {
        let creds = Credentials::try_from_parts("alice", "hunter2").expect("valid inputs");
        let digest = PasswordDigest::new("$2b$04$abcdefghijklmnopqrstuv");

        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{digest:?}").contains("$2b$"));
    }
}
