//! Endpoint methods, one module per API family

mod connectors;
mod form_definitions;
mod identity_attributes;
mod lifecycle_states;
mod managed_clusters;
mod sources;
mod transforms;
