use std::fmt;

use crate::auth::errors::ValidationError;

/// User identifier value type
///
/// Opaque non-empty text key naming a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a new valid user id.
    ///
    /// # Arguments
    /// * `id` - Raw identifier string
    ///
    /// # Returns
    /// Validated UserId value object
    ///
    /// # Errors
    /// * `EmptyUserId` - Identifier is empty
    pub fn new(id: String) -> Result<Self, ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        Ok(Self(id))
    }

    /// Get the identifier as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User record resolved from storage.
///
/// The stored password is held as opaque text and compared by exact
/// equality only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub password: String,
}

impl User {
    /// Construct a user record.
    pub fn new(id: UserId, password: String) -> Self {
        Self { id, password }
    }

    /// Compare the stored password against a candidate.
    ///
    /// Exact string equality, no normalization.
    ///
    /// # Returns
    /// `true` when the candidate equals the stored password
    pub fn matches_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Proof of successful authentication.
///
/// Carries the id of the resolved user; immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    id: UserId,
}

impl Authentication {
    /// Construct an authentication for a resolved user id.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    /// Get the authenticated user id.
    pub fn id(&self) -> &UserId {
        &self.id
    }
}
