//! Ticketing backend API client.
//!
//! A thin typed wrapper over the backend's HTTP API: base URL and timeout
//! configuration, the `{"data": …}` response envelope, and the `{"msg": …}`
//! error-body contract.

mod client;
mod error;

pub use client::{BackendClient, BackendConfig};
pub use error::BackendError;
