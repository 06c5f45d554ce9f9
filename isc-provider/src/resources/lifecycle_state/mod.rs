//! Lifecycle state - Identity profile lifecycle states
//! (`/v3/identity-profiles/{id}/lifecycle-states`)

mod model;
mod resource;
mod schema;

pub use model::{AccountActionModel, EmailNotificationOptionModel, LifecycleStateModel};
pub use resource::{LifecycleStateDataSource, LifecycleStateResource};
