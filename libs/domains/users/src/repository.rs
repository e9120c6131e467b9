use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, order unspecified
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by id
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Get the first user with the given email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Store a new user under the next free id, returning the stored copy
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replace the user stored at `id`; `None` when the id is absent
    async fn update(&self, id: i64, user: User) -> UserResult<Option<User>>;

    /// Delete a user by id; `false` when the id is absent
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    users: HashMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository.
///
/// The map and the id counter live behind a single lock so concurrent
/// creates cannot interleave id assignment. The counter only ever grows:
/// ids are never reused within the store's lifetime, even after deletes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        // The submitted id is ignored; the store assigns the next one
        store.last_id += 1;
        user.id = store.last_id;
        store.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i64, mut user: User) -> UserResult<Option<User>> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Ok(None);
        }

        user.id = id;
        store.users.insert(id, user.clone());

        tracing::info!(user_id = id, "Updated user");
        Ok(Some(user))
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
