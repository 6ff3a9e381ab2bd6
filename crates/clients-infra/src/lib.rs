//! # Clients Infrastructure
//!
//! Concrete implementations of the repository port defined in `clients-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! Without `postgres` only the in-memory repository is built.

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryClientRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresClientRepository};
