//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{ROLE_ADMIN, ROLE_USER};

/// Storage-assigned user identifier
pub type UserId = i64;

/// User roles enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub occupation: String,
    pub role: UserRole,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Stored avatar file location, set after registration
    pub avatar_file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Point the avatar at a stored file
    pub fn set_avatar(&mut self, file_location: impl Into<String>) {
        self.avatar_file_name = Some(file_location.into());
        self.updated_at = Utc::now();
    }
}

/// A user that has not been stored yet; storage assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub occupation: String,
    pub role: UserRole,
    pub password_hash: String,
}

/// Registration input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Occupation is required"))]
    pub occupation: String,
}

/// Login input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Email availability check input
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckEmailInput {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub occupation: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            occupation: user.occupation,
            email: user.email,
            image_url: user.avatar_file_name,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self::from(user.clone())
    }
}
