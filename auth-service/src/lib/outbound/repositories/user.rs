use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::errors::AuthError;
use crate::auth::models::User;
use crate::auth::models::UserId;
use crate::auth::ports::UserRepository;

/// Map-backed user store.
///
/// Stands in for a persistent store in tests and examples. Safe for
/// concurrent reads; lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a user record, replacing any record with the same id.
    pub async fn insert(&self, user: User) {
        let id = user.id.clone();
        self.users.write().await.insert(id.clone(), user);

        tracing::debug!("User record stored: {}", id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}
