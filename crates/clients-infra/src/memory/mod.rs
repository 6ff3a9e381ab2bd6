//! In-memory repository - used when no database is configured.

mod client;

pub use client::InMemoryClientRepository;
