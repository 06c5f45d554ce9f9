//! Form definition - Custom forms (`/beta/form-definitions`)

mod model;
mod resource;
mod schema;

pub use model::{FormDefinitionModel, FormDefinitionPatch};
pub use resource::{FormDefinitionDataSource, FormDefinitionResource};
