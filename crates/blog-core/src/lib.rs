//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate contains the `Post` entity and the storage port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
