//! Wire DTOs for the ISC REST APIs
//!
//! Field names follow the API's camelCase JSON. Optional fields are skipped
//! when serializing so that create and replace requests only carry what the
//! caller set.

mod connector;
mod form_definition;
mod identity_attribute;
mod lifecycle_state;
mod managed_cluster;
mod source;
mod transform;

pub use connector::{ConnectorDetail, CreateConnectorRequest};
pub use form_definition::FormDefinition;
pub use identity_attribute::{IdentityAttribute, IdentityAttributeSource};
pub use lifecycle_state::{AccountAction, EmailNotificationOption, LifecycleState};
pub use managed_cluster::{ManagedCluster, ManagedClusterRequest};
pub use source::Source;
pub use transform::Transform;

use serde::{Deserialize, Serialize};

/// Reference to another ISC object (owner, cluster, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
