//! Managed cluster - Virtual appliance clusters (`/beta/managed-clusters`)

mod model;
mod resource;
mod schema;

pub use model::ManagedClusterModel;
pub use resource::{ManagedClusterDataSource, ManagedClusterResource};
