//! Transform - Attribute transforms (`/v3/transforms`)

mod model;
mod resource;
mod schema;

pub use model::TransformModel;
pub use resource::{TransformDataSource, TransformResource};
