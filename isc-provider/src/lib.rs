//! ISC Provider
//!
//! Resources and data sources for SailPoint Identity Security Cloud.
//!
//! ## Module Structure
//!
//! - `provider` - IscProvider: configuration and handler registry
//! - `resources` - One module per resource family (model, schema, handlers)
//! - `errors` - Conversion of provider errors into host diagnostics
//! - `validation` - Static attribute validators

pub mod errors;
pub mod provider;
pub mod resources;
pub mod validation;

pub use errors::to_diagnostic;
pub use provider::{IscProvider, ProviderConfig};
