//! Managed cluster resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::differ::{Patchable, changed_fields, diff};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;
use log::debug;

use super::model::ManagedClusterModel;
use super::schema;
use crate::resources::{deleted, found};

pub struct ManagedClusterResource {
    client: Arc<IscClient>,
}

impl ManagedClusterResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for ManagedClusterResource {
    fn name(&self) -> &'static str {
        "managed_cluster"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for ManagedClusterResource {
    type Model = ManagedClusterModel;

    async fn create(&self, plan: &ManagedClusterModel) -> ProviderResult<ManagedClusterModel> {
        let request = plan.to_create_request()?;
        let dto = self
            .client
            .create_managed_cluster(&request)
            .await
            .during("Create managed cluster")?;
        Ok(ManagedClusterModel::from_response(dto, plan))
    }

    async fn read(
        &self,
        state: &ManagedClusterModel,
    ) -> ProviderResult<Option<ManagedClusterModel>> {
        let id = require(&state.id, "id")?;
        let dto = found(
            self.client.get_managed_cluster(id).await,
            "Get managed cluster",
        )?;
        Ok(dto.map(|dto| ManagedClusterModel::from_response(dto, state)))
    }

    async fn update(
        &self,
        plan: &ManagedClusterModel,
        state: &ManagedClusterModel,
    ) -> ProviderResult<ManagedClusterModel> {
        let id = require(&state.id, "id")?;
        let operations = diff(plan, state);

        let dto = if operations.is_empty() {
            if plan != state {
                debug!(
                    "{} {}: plan differs outside patchable fields, nothing to send",
                    ManagedClusterModel::RESOURCE_TYPE,
                    id
                );
            }
            self.client
                .get_managed_cluster(id)
                .await
                .during("Get managed cluster")?
        } else {
            debug!(
                "{} {}: patching {:?}",
                ManagedClusterModel::RESOURCE_TYPE,
                id,
                changed_fields(plan, state)
            );
            self.client
                .update_managed_cluster(id, &operations)
                .await
                .during("Update managed cluster")?
        };

        // remove_clients_on_delete may change without an API call
        Ok(ManagedClusterModel::from_response(dto, plan))
    }

    async fn delete(&self, state: &ManagedClusterModel) -> ProviderResult<()> {
        let id = require(&state.id, "id")?;
        deleted(
            self.client
                .delete_managed_cluster(id, state.remove_clients())
                .await,
            "Delete managed cluster",
        )
    }

    async fn import_state(&self, id: &str) -> ProviderResult<ManagedClusterModel> {
        let dto = self
            .client
            .get_managed_cluster(id)
            .await
            .during("Get managed cluster")?;
        Ok(ManagedClusterModel::from_response(
            dto,
            &ManagedClusterModel::default(),
        ))
    }
}

pub struct ManagedClusterDataSource {
    client: Arc<IscClient>,
}

impl ManagedClusterDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for ManagedClusterDataSource {
    fn name(&self) -> &'static str {
        "managed_cluster"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for ManagedClusterDataSource {
    type Model = ManagedClusterModel;

    async fn read(&self, config: &ManagedClusterModel) -> ProviderResult<ManagedClusterModel> {
        let id = require(&config.id, "id")?;
        let dto = self
            .client
            .get_managed_cluster(id)
            .await
            .during("Read managed cluster")?;
        Ok(ManagedClusterModel::from_response(
            dto,
            &ManagedClusterModel::default(),
        ))
    }
}
