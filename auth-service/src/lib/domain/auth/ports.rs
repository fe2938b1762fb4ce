use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::models::Authentication;
use crate::auth::models::User;
use crate::auth::models::UserId;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and produce an authentication.
    ///
    /// Checks run in fixed order; the first failing check wins and no
    /// further checks run. At most one repository lookup is made per call,
    /// with exactly the supplied id.
    ///
    /// # Arguments
    /// * `id` - Raw user identifier
    /// * `password` - Raw password to verify
    ///
    /// # Returns
    /// Authentication carrying the resolved user id
    ///
    /// # Errors
    /// * `InvalidArgument` - Id or password is empty (checked before lookup)
    /// * `UserNotFound` - No user exists for this id
    /// * `WrongPassword` - User exists but the password does not match
    /// * `Repository` - Lookup failed in the repository adapter
    async fn authenticate(&self, id: &str, password: &str) -> Result<Authentication, AuthError>;
}

/// Lookup operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Resolve a user by identifier.
    ///
    /// # Arguments
    /// * `id` - User id
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Repository` - Lookup failed in the adapter
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
}
