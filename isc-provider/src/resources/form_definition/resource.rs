//! Form definition resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::differ::{Patchable, changed_fields, diff};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;
use log::debug;

use super::model::{FormDefinitionModel, FormDefinitionPatch};
use super::schema;
use crate::resources::{deleted, found};

pub struct FormDefinitionResource {
    client: Arc<IscClient>,
}

impl FormDefinitionResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, id: &str) -> ProviderResult<FormDefinitionModel> {
        let dto = self
            .client
            .get_form_definition(id)
            .await
            .during("Get form definition")?;
        FormDefinitionModel::from_response(dto)
    }
}

impl ResourceType for FormDefinitionResource {
    fn name(&self) -> &'static str {
        "form_definition"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for FormDefinitionResource {
    type Model = FormDefinitionModel;

    async fn create(&self, plan: &FormDefinitionModel) -> ProviderResult<FormDefinitionModel> {
        let request = plan.to_create_request()?;
        let dto = self
            .client
            .create_form_definition(&request)
            .await
            .during("Create form definition")?;
        FormDefinitionModel::from_response(dto)
    }

    async fn read(
        &self,
        state: &FormDefinitionModel,
    ) -> ProviderResult<Option<FormDefinitionModel>> {
        let id = require(&state.id, "id")?;
        match found(
            self.client.get_form_definition(id).await,
            "Get form definition",
        )? {
            Some(dto) => FormDefinitionModel::from_response(dto).map(Some),
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        plan: &FormDefinitionModel,
        state: &FormDefinitionModel,
    ) -> ProviderResult<FormDefinitionModel> {
        let id = require(&state.id, "id")?;
        let planned = FormDefinitionPatch::try_from(plan)?;
        let current = FormDefinitionPatch::try_from(state)?;
        let operations = diff(&planned, &current);

        if operations.is_empty() {
            debug!(
                "{} {}: no patchable changes",
                FormDefinitionPatch::RESOURCE_TYPE,
                id
            );
            return self.fetch(id).await;
        }

        debug!(
            "{} {}: patching {:?}",
            FormDefinitionPatch::RESOURCE_TYPE,
            id,
            changed_fields(&planned, &current)
        );
        let dto = self
            .client
            .update_form_definition(id, &operations)
            .await
            .during("Update form definition")?;
        FormDefinitionModel::from_response(dto)
    }

    async fn delete(&self, state: &FormDefinitionModel) -> ProviderResult<()> {
        let id = require(&state.id, "id")?;
        deleted(
            self.client.delete_form_definition(id).await,
            "Delete form definition",
        )
    }

    async fn import_state(&self, id: &str) -> ProviderResult<FormDefinitionModel> {
        self.fetch(id).await
    }
}

pub struct FormDefinitionDataSource {
    client: Arc<IscClient>,
}

impl FormDefinitionDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for FormDefinitionDataSource {
    fn name(&self) -> &'static str {
        "form_definition"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for FormDefinitionDataSource {
    type Model = FormDefinitionModel;

    async fn read(&self, config: &FormDefinitionModel) -> ProviderResult<FormDefinitionModel> {
        let id = require(&config.id, "id")?;
        let dto = self
            .client
            .get_form_definition(id)
            .await
            .during("Read form definition")?;
        FormDefinitionModel::from_response(dto)
    }
}
