//! Managed cluster model; configuration keys are converted at the wire boundary

use std::collections::BTreeMap;

use isc_client::models::{ManagedCluster, ManagedClusterRequest};
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::case_convert::{map_keys_to_camel_case, map_keys_to_snake_case};
use isc_core::differ::{FieldRef, PatchField, Patchable};
use isc_core::provider::{ProviderResult, require};
use isc_core::value::Value;

use crate::resources::opt;

/// Plan/state model of `isc_managed_cluster`
///
/// `configuration` keys are snake_case here and camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagedClusterModel {
    pub id: Value<String>,
    pub name: Value<String>,
    /// `type` attribute
    pub kind: Value<String>,
    pub description: Value<String>,
    pub configuration: Value<BTreeMap<String, String>>,
    pub client_type: Value<String>,
    pub ccg_version: Value<String>,
    pub pod: Value<String>,
    pub org: Value<String>,
    pub status: Value<String>,
    /// Local only; sent as `removeClients` on delete
    pub remove_clients_on_delete: Value<bool>,
}

impl ManagedClusterModel {
    /// Map an API response, keeping local-only attributes from `prior`
    pub fn from_response(dto: ManagedCluster, prior: &Self) -> Self {
        Self {
            id: Value::from_option(dto.id),
            name: Value::from_option(dto.name),
            kind: Value::from_option(dto.kind),
            description: Value::from_option(dto.description),
            configuration: Value::from_option(
                dto.configuration.as_ref().map(map_keys_to_snake_case),
            ),
            client_type: Value::from_option(dto.client_type),
            ccg_version: Value::from_option(dto.ccg_version),
            pod: Value::from_option(dto.pod),
            org: Value::from_option(dto.org),
            status: Value::from_option(dto.status),
            remove_clients_on_delete: prior.remove_clients_on_delete.clone(),
        }
    }

    pub fn to_create_request(&self) -> ProviderResult<ManagedClusterRequest> {
        Ok(ManagedClusterRequest {
            name: require(&self.name, "name")?.clone(),
            kind: opt(&self.kind),
            configuration: self.configuration.known().map(map_keys_to_camel_case),
            description: opt(&self.description),
        })
    }

    pub fn remove_clients(&self) -> bool {
        self.remove_clients_on_delete.known().copied().unwrap_or(false)
    }
}

impl AttributeModel for ManagedClusterModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
            kind: attributes::get(attributes, "type")?,
            description: attributes::get(attributes, "description")?,
            configuration: attributes::get(attributes, "configuration")?,
            client_type: attributes::get(attributes, "client_type")?,
            ccg_version: attributes::get(attributes, "ccg_version")?,
            pod: attributes::get(attributes, "pod")?,
            org: attributes::get(attributes, "org")?,
            status: attributes::get(attributes, "status")?,
            remove_clients_on_delete: attributes::get(attributes, "remove_clients_on_delete")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "id", &self.id);
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "description", &self.description);
        attributes::set(&mut attributes, "configuration", &self.configuration);
        attributes::set(&mut attributes, "client_type", &self.client_type);
        attributes::set(&mut attributes, "ccg_version", &self.ccg_version);
        attributes::set(&mut attributes, "pod", &self.pod);
        attributes::set(&mut attributes, "org", &self.org);
        attributes::set(&mut attributes, "status", &self.status);
        attributes::set(
            &mut attributes,
            "remove_clients_on_delete",
            &self.remove_clients_on_delete,
        );
        attributes
    }
}

impl Patchable for ManagedClusterModel {
    const RESOURCE_TYPE: &'static str = "isc_managed_cluster";

    fn patch_fields() -> Vec<PatchField<Self>> {
        vec![
            PatchField::<Self>::new("name", "/name", |m| FieldRef::String(&m.name)),
            PatchField::<Self>::new("description", "/description", |m| {
                FieldRef::String(&m.description)
            }),
            PatchField::<Self>::new("configuration", "/configuration", |m| {
                FieldRef::StringMap(&m.configuration)
            })
            .camel_case_keys(),
        ]
    }
}
