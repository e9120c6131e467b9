use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic.
///
/// CRUD delegates to the repository; passwords are hashed on the way in.
/// Every method returns the stored record as-is, hash included — stripping
/// the password is the HTTP boundary's job, so internal callers such as
/// `authenticate` still see the real hash.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<User> {
        self.repository.get_by_email(email).await?.ok_or_else(|| {
            UserError::Validation(format!("User with email '{}' not found", email))
        })
    }

    /// Create a new user, hashing the password when one is supplied
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let password = self.hash_if_set(&input.password)?;

        let user = User {
            id: 0,
            name: input.name,
            email: input.email,
            password,
        };

        self.repository.create(user).await
    }

    /// Replace a user wholesale.
    ///
    /// Every stored field is overwritten. An empty incoming password clears
    /// any previously stored hash instead of preserving it.
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        let password = self.hash_if_set(&input.password)?;

        let user = User {
            id,
            name: input.name,
            email: input.email,
            password,
        };

        self.repository
            .update(id, user)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    /// Verify user credentials (for login).
    ///
    /// Unknown email, wrong password, and an unparseable stored hash all
    /// fail with the same error so a caller cannot enumerate accounts.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<User> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password) {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    // Password helpers

    fn hash_if_set(&self, password: &str) -> UserResult<String> {
        if password.is_empty() {
            Ok(String::new())
        } else {
            self.hash_password(password)
        }
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
