//! Identity attribute resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;

use super::model::IdentityAttributeModel;
use super::schema;
use crate::resources::{deleted, found};

pub struct IdentityAttributeResource {
    client: Arc<IscClient>,
}

impl IdentityAttributeResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for IdentityAttributeResource {
    fn name(&self) -> &'static str {
        "identity_attribute"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for IdentityAttributeResource {
    type Model = IdentityAttributeModel;

    async fn create(&self, plan: &IdentityAttributeModel) -> ProviderResult<IdentityAttributeModel> {
        let request = plan.to_request()?;
        let dto = self
            .client
            .create_identity_attribute(&request)
            .await
            .during("Create identity attribute")?;
        IdentityAttributeModel::from_response(dto)
    }

    async fn read(
        &self,
        state: &IdentityAttributeModel,
    ) -> ProviderResult<Option<IdentityAttributeModel>> {
        let name = require(&state.name, "name")?;
        match found(
            self.client.get_identity_attribute(name).await,
            "Get identity attribute",
        )? {
            Some(dto) => IdentityAttributeModel::from_response(dto).map(Some),
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        plan: &IdentityAttributeModel,
        state: &IdentityAttributeModel,
    ) -> ProviderResult<IdentityAttributeModel> {
        let name = require(&state.name, "name")?;
        let request = plan.to_request()?;
        let dto = self
            .client
            .put_identity_attribute(name, &request)
            .await
            .during("Update identity attribute")?;
        IdentityAttributeModel::from_response(dto)
    }

    async fn delete(&self, state: &IdentityAttributeModel) -> ProviderResult<()> {
        let name = require(&state.name, "name")?;
        deleted(
            self.client.delete_identity_attribute(name).await,
            "Delete identity attribute",
        )
    }

    async fn import_state(&self, id: &str) -> ProviderResult<IdentityAttributeModel> {
        let dto = self
            .client
            .get_identity_attribute(id)
            .await
            .during("Get identity attribute")?;
        IdentityAttributeModel::from_response(dto)
    }
}

pub struct IdentityAttributeDataSource {
    client: Arc<IscClient>,
}

impl IdentityAttributeDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for IdentityAttributeDataSource {
    fn name(&self) -> &'static str {
        "identity_attribute"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for IdentityAttributeDataSource {
    type Model = IdentityAttributeModel;

    async fn read(&self, config: &IdentityAttributeModel) -> ProviderResult<IdentityAttributeModel> {
        let name = require(&config.name, "name")?;
        let dto = self
            .client
            .get_identity_attribute(name)
            .await
            .during("Read identity attribute")?;
        IdentityAttributeModel::from_response(dto)
    }
}
