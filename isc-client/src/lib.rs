//! ISC Client
//!
//! Thin async REST client for the SailPoint Identity Security Cloud APIs used
//! by the provider.
//!
//! ## Module Structure
//!
//! - `config` - Tenant URL and OAuth credentials
//! - `auth` - Client-credentials token fetching and caching
//! - `client` - Request plumbing (one call per operation, no retries)
//! - `api` - Endpoint methods per resource family
//! - `models` - Wire DTOs

mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::IscClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, OperationContext};
