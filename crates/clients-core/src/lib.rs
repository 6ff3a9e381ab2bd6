//! # Clients Core
//!
//! The domain layer of the client registry: the `Client` entity, paging
//! types, the repository port, and the `ClientService` business operations.
//! Nothing in here knows about HTTP or a concrete database.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult};
