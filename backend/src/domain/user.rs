//! User data model.
//!
//! `User` is the record returned to callers. Credential digests live on
//! [`UserAccount`] only, so no serialised `User` can carry one.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PasswordDigest;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was not an integer.
    #[error("user id must be an integer")]
    InvalidId,
    /// The age exceeds what the store can hold.
    #[error("age must be at most {max}")]
    AgeTooLarge {
        /// Largest accepted age.
        max: u32,
    },
}

/// Store-assigned user identifier.
///
/// Any integer is a well-formed identifier; absent rows are a lookup concern,
/// not a parsing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User name, stored verbatim.
///
/// Any string is accepted here; signup and login apply their own blank check
/// in [`crate::domain::Credentials`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Wrap a raw name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Largest age the store accepts (`INTEGER` column).
pub const AGE_MAX: u32 = i32::MAX as u32;

/// Non-negative user age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    /// Validate and construct an [`Age`].
    pub fn new(age: u32) -> Result<Self, UserValidationError> {
        if age > AGE_MAX {
            return Err(UserValidationError::AgeTooLarge { max: AGE_MAX });
        }
        Ok(Self(age))
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero is treated as "not provided" by partial updates.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Application user.
///
/// Serialises as `{"id", "name", "age", "created_at", "updated_at"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: UserName,
    age: Age,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from stored components.
    #[must_use]
    pub fn new(
        id: UserId,
        name: UserName,
        age: Age,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            age,
            created_at,
            updated_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// User name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// User age.
    pub fn age(&self) -> Age {
        self.age
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a partial update, keeping stored values for absent fields.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{Age, User, UserId, UserName, UserPatch};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// let user = User::new(
    ///     UserId::new(1),
    ///     UserName::new("test"),
    ///     Age::new(30).unwrap(),
    ///     now,
    ///     now,
    /// );
    /// let patch = UserPatch::from_parts(None, Some(31)).unwrap();
    /// let merged = user.merged(&patch);
    /// assert_eq!(merged.name().as_ref(), "test");
    /// assert_eq!(merged.age().get(), 31);
    /// ```
    #[must_use]
    pub fn merged(mut self, patch: &UserPatch) -> Self {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        self
    }
}

/// A stored user together with its credential digest.
///
/// Only the credential policy reads this; handlers never serialise it.
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Public user record.
    pub user: User,
    /// Digest set at signup; `None` for users created without a password.
    pub password_digest: Option<PasswordDigest>,
}

/// Allow-listed fields copied from an untrusted payload into a new row.
///
/// Identifiers, timestamps, and digests supplied by callers never reach this
/// type; the digest is only attached by the credential policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
    age: Age,
    password_digest: Option<PasswordDigest>,
}

impl NewUser {
    /// Build a new user without credentials.
    #[must_use]
    pub fn new(name: UserName, age: Age) -> Self {
        Self {
            name,
            age,
            password_digest: None,
        }
    }

    /// Attach a password digest.
    #[must_use]
    pub fn with_password_digest(mut self, digest: PasswordDigest) -> Self {
        self.password_digest = Some(digest);
        self
    }

    /// Requested name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Requested age.
    pub fn age(&self) -> Age {
        self.age
    }

    /// Attached password digest, if any.
    pub fn password_digest(&self) -> Option<&PasswordDigest> {
        self.password_digest.as_ref()
    }
}

/// Partial update for a user.
///
/// `None` means "leave unchanged". Empty names and zero ages are folded into
/// `None` so they never overwrite stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<UserName>,
    age: Option<Age>,
}

impl UserPatch {
    /// Build a patch from optional raw fields.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] when a present age is out of range.
    pub fn from_parts(
        name: Option<String>,
        age: Option<u32>,
    ) -> Result<Self, UserValidationError> {
        let name = name.filter(|value| !value.is_empty()).map(UserName::new);
        let age = age
            .map(Age::new)
            .transpose()?
            .filter(|value| !value.is_zero());
        Ok(Self { name, age })
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }

    /// Name to apply, if any.
    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    /// Age to apply, if any.
    pub fn age(&self) -> Option<Age> {
        self.age
    }
}
