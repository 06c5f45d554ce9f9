//! ISC Core
//!
//! Core library for the Identity Security Cloud provider: tri-state values,
//! JSON Patch building, plan/state diffing and resource schemas

pub mod attributes;
pub mod case_convert;
pub mod differ;
pub mod patch;
pub mod provider;
pub mod schema;
pub mod value;

pub use attributes::{AttributeModel, Attributes};
pub use differ::{FieldRef, PatchField, Patchable, diff};
pub use patch::{PatchBuilder, PatchOp, PatchOperation};
pub use provider::{Diagnostic, ProviderError, ProviderResult, Severity};
pub use value::{Value, ValueError};
