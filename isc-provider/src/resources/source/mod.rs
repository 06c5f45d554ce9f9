//! Source - Account sources (`/v3/sources`)

mod model;
mod resource;
mod schema;

pub use model::SourceModel;
pub use resource::{SourceDataSource, SourceResource};
