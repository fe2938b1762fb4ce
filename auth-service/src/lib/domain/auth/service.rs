use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::errors::ValidationError;
use crate::auth::models::Authentication;
use crate::auth::models::User;
use crate::auth::models::UserId;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserRepository;

/// Domain service implementing the credential check.
///
/// Stateless apart from the injected repository, so one instance can be
/// shared across tasks behind an `Arc`.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with an injected repository.
    ///
    /// # Arguments
    /// * `repository` - User lookup implementation
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(repository: Arc<UR>) -> Self {
        Self { repository }
    }

    // Id is checked before password; the first failing check wins.
    fn validated(id: &str, password: &str) -> Result<UserId, ValidationError> {
        let id = UserId::new(id.to_string())?;

        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }

        Ok(id)
    }

    async fn find_user(&self, id: &UserId) -> Result<User, AuthError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(id.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, id: &str, password: &str) -> Result<Authentication, AuthError> {
        let id = Self::validated(id, password)?;

        let user = self.find_user(&id).await?;

        if !user.matches_password(password) {
            return Err(AuthError::WrongPassword);
        }

        Ok(Authentication::new(user.id))
    }
}
