//! User Service Library
//!
//! Registration, credential checks, avatar assignment and lookup for platform
//! users. Storage is reached through [`repository::UserRepository`]; issuing
//! session tokens after a successful login is left to the caller.

pub mod config;
pub mod repository;
pub mod service;

pub use config::UserServiceConfig;
pub use repository::UserRepository;
pub use service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
