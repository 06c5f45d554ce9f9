//! Source resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;
use log::debug;

use super::model::SourceModel;
use super::schema;
use crate::resources::{deleted, found};

pub struct SourceResource {
    client: Arc<IscClient>,
}

impl SourceResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for SourceResource {
    fn name(&self) -> &'static str {
        "source"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for SourceResource {
    type Model = SourceModel;

    async fn create(&self, plan: &SourceModel) -> ProviderResult<SourceModel> {
        let mut request = plan.to_request()?;
        request.id = None;
        let dto = self
            .client
            .create_source(&request)
            .await
            .during("Create source")?;
        SourceModel::from_response(dto)
    }

    async fn read(&self, state: &SourceModel) -> ProviderResult<Option<SourceModel>> {
        let id = require(&state.id, "id")?;
        match found(self.client.get_source(id).await, "Get source")? {
            Some(dto) => SourceModel::from_response(dto).map(Some),
            None => Ok(None),
        }
    }

    async fn update(&self, plan: &SourceModel, state: &SourceModel) -> ProviderResult<SourceModel> {
        let id = require(&state.id, "id")?;
        let mut request = plan.to_request()?;
        request.id = Some(id.clone());

        debug!("isc_source {}: replacing source", id);
        let dto = self
            .client
            .put_source(id, &request)
            .await
            .during("Update source")?;
        SourceModel::from_response(dto)
    }

    async fn delete(&self, state: &SourceModel) -> ProviderResult<()> {
        let id = require(&state.id, "id")?;
        deleted(self.client.delete_source(id).await, "Delete source")
    }

    async fn import_state(&self, id: &str) -> ProviderResult<SourceModel> {
        let dto = self.client.get_source(id).await.during("Get source")?;
        SourceModel::from_response(dto)
    }
}

pub struct SourceDataSource {
    client: Arc<IscClient>,
}

impl SourceDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for SourceDataSource {
    fn name(&self) -> &'static str {
        "source"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for SourceDataSource {
    type Model = SourceModel;

    async fn read(&self, config: &SourceModel) -> ProviderResult<SourceModel> {
        let id = require(&config.id, "id")?;
        let dto = self.client.get_source(id).await.during("Read source")?;
        SourceModel::from_response(dto)
    }
}
