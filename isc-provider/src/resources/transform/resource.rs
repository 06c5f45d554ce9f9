//! Transform resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;

use super::model::TransformModel;
use super::schema;
use crate::resources::{deleted, found};

pub struct TransformResource {
    client: Arc<IscClient>,
}

impl TransformResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for TransformResource {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for TransformResource {
    type Model = TransformModel;

    async fn create(&self, plan: &TransformModel) -> ProviderResult<TransformModel> {
        let request = plan.to_request()?;
        let dto = self
            .client
            .create_transform(&request)
            .await
            .during("Create transform")?;
        TransformModel::from_response(dto)
    }

    async fn read(&self, state: &TransformModel) -> ProviderResult<Option<TransformModel>> {
        let id = require(&state.id, "id")?;
        match found(self.client.get_transform(id).await, "Get transform")? {
            Some(dto) => TransformModel::from_response(dto).map(Some),
            None => Ok(None),
        }
    }

    async fn update(&self, plan: &TransformModel, state: &TransformModel) -> ProviderResult<TransformModel> {
        let id = require(&state.id, "id")?;
        let request = plan.to_request()?;
        let dto = self
            .client
            .put_transform(id, &request)
            .await
            .during("Update transform")?;
        TransformModel::from_response(dto)
    }

    async fn delete(&self, state: &TransformModel) -> ProviderResult<()> {
        let id = require(&state.id, "id")?;
        deleted(self.client.delete_transform(id).await, "Delete transform")
    }

    async fn import_state(&self, id: &str) -> ProviderResult<TransformModel> {
        let dto = self.client.get_transform(id).await.during("Get transform")?;
        TransformModel::from_response(dto)
    }
}

pub struct TransformDataSource {
    client: Arc<IscClient>,
}

impl TransformDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for TransformDataSource {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for TransformDataSource {
    type Model = TransformModel;

    async fn read(&self, config: &TransformModel) -> ProviderResult<TransformModel> {
        let id = require(&config.id, "id")?;
        let dto = self.client.get_transform(id).await.during("Read transform")?;
        TransformModel::from_response(dto)
    }
}
