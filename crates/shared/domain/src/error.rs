//! Errors raised by domain value objects.
//!
//! Lookup, ownership and storage failures are service concerns and live in
//! `common::AppError`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input or configuration rejected by a domain rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Argon2 could not produce or parse a hash
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    pub fn password_hash(msg: impl Into<String>) -> Self {
        DomainError::PasswordHash(msg.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
