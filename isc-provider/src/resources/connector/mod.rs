//! Connector - Custom connectors (`/beta/connectors`)

mod model;
mod resource;
mod schema;

pub use model::ConnectorModel;
pub use resource::{ConnectorDataSource, ConnectorResource};
