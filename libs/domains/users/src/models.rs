use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity.
///
/// Once a record has passed through the service layer, `password` holds the
/// Argon2 hash of the original secret (or the empty string when none was
/// set). Handlers never serialize this type directly; they expose users
/// through [`UserResponse`] so the hash stays inside the trust boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the repository at creation time
    pub id: i64,
    /// Display name, optional
    #[serde(default)]
    pub name: String,
    /// Authentication lookup key; uniqueness is not enforced by the store
    pub email: String,
    /// Argon2 password hash
    #[serde(default)]
    pub password: String,
}

/// User response DTO (without the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// DTO for replacing an existing user.
///
/// Updates overwrite every stored field: an omitted or empty password
/// clears the stored hash rather than leaving it unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default)]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// DTO for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// DTO for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// Response after successful register/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
