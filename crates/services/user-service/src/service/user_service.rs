//! User service - Member accounts.
//!
//! Registration hashes the password before it reaches storage; login and
//! avatar changes look the account up first and never create one.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{
    CheckEmailInput, HashCost, LoginInput, NewUser, Password, RegisterUserInput, User, UserId,
    UserRole,
};

use crate::config::UserServiceConfig;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new member account
    async fn register_user(&self, input: RegisterUserInput) -> AppResult<User>;

    /// Check credentials and return the matching user
    ///
    /// Fails with `NotFound` for an unknown email and `Unauthorized` for a
    /// wrong password.
    async fn login(&self, input: LoginInput) -> AppResult<User>;

    /// Check whether no account uses this email yet
    async fn is_email_available(&self, input: CheckEmailInput) -> AppResult<bool>;

    /// Point the acting user's avatar at an already-stored file
    async fn save_avatar(&self, user_id: UserId, file_location: String) -> AppResult<User>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: UserId) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hash_cost: HashCost,
}

impl UserManager {
    /// Create new user service instance with the default hash cost
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
            hash_cost: HashCost::default(),
        }
    }

    /// Create a user service from configuration
    ///
    /// # Errors
    /// Returns a validation error if the configured hash cost is unusable.
    pub fn with_config(repo: Arc<dyn UserRepository>, config: &UserServiceConfig) -> AppResult<Self> {
        config.hash_cost.validate()?;

        Ok(Self {
            repo,
            hash_cost: config.hash_cost,
        })
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register_user(&self, input: RegisterUserInput) -> AppResult<User> {
        let password_hash = Password::new(&input.password, &self.hash_cost)?.into_string();

        let user = self
            .repo
            .save(NewUser {
                name: input.name,
                email: input.email,
                occupation: input.occupation,
                role: UserRole::User,
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, input: LoginInput) -> AppResult<User> {
        let user = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or_not_found("User")?;

        if !Password::from_hash(user.password_hash.as_str()).verify(&input.password) {
            warn!(user_id = user.id, "Login rejected: password mismatch");
            return Err(AppError::Unauthorized);
        }

        Ok(user)
    }

    async fn is_email_available(&self, input: CheckEmailInput) -> AppResult<bool> {
        Ok(self.repo.find_by_email(&input.email).await?.is_none())
    }

    async fn save_avatar(&self, user_id: UserId, file_location: String) -> AppResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or_not_found("User")?;

        user.set_avatar(file_location);

        let updated = self.repo.update(user).await?;
        info!(user_id = updated.id, "Avatar updated");
        Ok(updated)
    }

    async fn get_user_by_id(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }
}
