//! Business operations exposed to the delivery layer.

mod client;

pub use client::{ClientService, ClientServiceImpl};

#[cfg(any(test, feature = "mock"))]
pub use client::MockClientService;
