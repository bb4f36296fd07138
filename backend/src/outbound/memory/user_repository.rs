//! In-memory `UserRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Email, NewUser, User, UserId};

use super::id_allocator::EntityKind;
use super::store::MemoryStore;

/// User repository backed by a shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: MemoryStore,
}

impl MemoryUserRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.store.users().rows.get(id).cloned()
    }

    async fn find_by_email(&self, email: &Email) -> Option<User> {
        let users = self.store.users();
        users
            .by_email
            .get(email)
            .and_then(|id| users.rows.get(*id))
            .cloned()
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.store.users_mut();
        if users.by_email.contains_key(&user.email) {
            return Err(UserRepositoryError::duplicate_email(user.email.as_ref()));
        }
        let id = UserId::from(self.store.ids().next(EntityKind::User));
        let user = User::from_new(id, user);
        users.by_email.insert(user.email().clone(), id);
        users.rows.put(id, user.clone());
        Ok(user)
    }
}
