//! User repository contract.
//!
//! Storage adapters implement this trait; the service layer only sees the
//! trait object. Each call is atomic on its own. Adapters report their own
//! failures with [`AppError::storage`](common::AppError::storage).

use async_trait::async_trait;

use common::AppResult;
use domain::{NewUser, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user; storage assigns the id
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> AppResult<User>;
}
