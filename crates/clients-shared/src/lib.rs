//! # Clients Shared
//!
//! Wire types exchanged between the API and its callers.

pub mod dto;
pub mod response;

pub use dto::ClientDto;
pub use response::ErrorResponse;
