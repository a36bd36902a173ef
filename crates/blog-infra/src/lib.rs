//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - without `postgres`, only the in-memory store is built

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
pub use memory::InMemoryPostRepository;
