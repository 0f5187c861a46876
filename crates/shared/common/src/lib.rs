//! Common utilities shared across all services.
//!
//! This crate provides the unified error taxonomy returned by every service
//! operation, with status mapping for whichever transport calls them.

pub mod error;

pub use error::{AppError, AppResult, BoxError, OptionExt};
