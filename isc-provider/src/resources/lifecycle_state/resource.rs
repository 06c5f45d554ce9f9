//! Lifecycle state resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::differ::{Patchable, changed_fields, diff};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;
use isc_core::value::Value;
use log::debug;

use super::model::{LifecycleStateModel, parse_import_id};
use super::schema;
use crate::resources::{deleted, found};

pub struct LifecycleStateResource {
    client: Arc<IscClient>,
}

impl LifecycleStateResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, identity_profile_id: &str, id: &str) -> ProviderResult<LifecycleStateModel> {
        let dto = self
            .client
            .get_lifecycle_state(identity_profile_id, id)
            .await
            .during("Get lifecycle state")?;
        Ok(LifecycleStateModel::from_response(
            Value::Known(identity_profile_id.to_string()),
            dto,
        ))
    }
}

impl ResourceType for LifecycleStateResource {
    fn name(&self) -> &'static str {
        "lifecycle_state"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for LifecycleStateResource {
    type Model = LifecycleStateModel;

    async fn create(&self, plan: &LifecycleStateModel) -> ProviderResult<LifecycleStateModel> {
        let identity_profile_id = require(&plan.identity_profile_id, "identity_profile_id")?;
        let request = plan.to_create_request()?;
        let dto = self
            .client
            .create_lifecycle_state(identity_profile_id, &request)
            .await
            .during("Create lifecycle state")?;
        Ok(LifecycleStateModel::from_response(
            plan.identity_profile_id.clone(),
            dto,
        ))
    }

    async fn read(
        &self,
        state: &LifecycleStateModel,
    ) -> ProviderResult<Option<LifecycleStateModel>> {
        let identity_profile_id = require(&state.identity_profile_id, "identity_profile_id")?;
        let id = require(&state.id, "id")?;
        let dto = found(
            self.client.get_lifecycle_state(identity_profile_id, id).await,
            "Get lifecycle state",
        )?;
        Ok(dto.map(|dto| {
            LifecycleStateModel::from_response(state.identity_profile_id.clone(), dto)
        }))
    }

    async fn update(
        &self,
        plan: &LifecycleStateModel,
        state: &LifecycleStateModel,
    ) -> ProviderResult<LifecycleStateModel> {
        let identity_profile_id = require(&state.identity_profile_id, "identity_profile_id")?;
        let id = require(&state.id, "id")?;
        let operations = diff(plan, state);

        if operations.is_empty() {
            if plan != state {
                debug!(
                    "{} {}: plan differs outside patchable fields, nothing to send",
                    LifecycleStateModel::RESOURCE_TYPE,
                    id
                );
            }
            return self.fetch(identity_profile_id, id).await;
        }

        debug!(
            "{} {}: patching {:?}",
            LifecycleStateModel::RESOURCE_TYPE,
            id,
            changed_fields(plan, state)
        );
        let dto = self
            .client
            .update_lifecycle_state(identity_profile_id, id, &operations)
            .await
            .during("Update lifecycle state")?;
        Ok(LifecycleStateModel::from_response(
            state.identity_profile_id.clone(),
            dto,
        ))
    }

    async fn delete(&self, state: &LifecycleStateModel) -> ProviderResult<()> {
        let identity_profile_id = require(&state.identity_profile_id, "identity_profile_id")?;
        let id = require(&state.id, "id")?;
        deleted(
            self.client
                .delete_lifecycle_state(identity_profile_id, id)
                .await,
            "Delete lifecycle state",
        )
    }

    async fn import_state(&self, id: &str) -> ProviderResult<LifecycleStateModel> {
        let (identity_profile_id, id) = parse_import_id(id)?;
        self.fetch(identity_profile_id, id).await
    }
}

pub struct LifecycleStateDataSource {
    client: Arc<IscClient>,
}

impl LifecycleStateDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for LifecycleStateDataSource {
    fn name(&self) -> &'static str {
        "lifecycle_state"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for LifecycleStateDataSource {
    type Model = LifecycleStateModel;

    async fn read(&self, config: &LifecycleStateModel) -> ProviderResult<LifecycleStateModel> {
        let identity_profile_id = require(&config.identity_profile_id, "identity_profile_id")?;
        let id = require(&config.id, "id")?;
        let dto = self
            .client
            .get_lifecycle_state(identity_profile_id, id)
            .await
            .during("Read lifecycle state")?;
        Ok(LifecycleStateModel::from_response(
            config.identity_profile_id.clone(),
            dto,
        ))
    }
}
