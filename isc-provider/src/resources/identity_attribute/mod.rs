//! Identity attribute - Identity profile attributes (`/beta/identity-attributes`)

mod model;
mod resource;
mod schema;

pub use model::{IdentityAttributeModel, IdentityAttributeSourceModel};
pub use resource::{IdentityAttributeDataSource, IdentityAttributeResource};
