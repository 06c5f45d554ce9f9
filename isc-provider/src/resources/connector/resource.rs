//! Connector resource and data source handlers

use std::sync::Arc;

use async_trait::async_trait;
use isc_client::{IscClient, OperationContext};
use isc_core::differ::{Patchable, changed_fields, diff};
use isc_core::provider::{DataSource, ProviderResult, Resource, ResourceType, require};
use isc_core::schema::ResourceSchema;
use log::{debug, warn};

use super::model::ConnectorModel;
use super::schema;
use crate::resources::{deleted, found};

pub struct ConnectorResource {
    client: Arc<IscClient>,
}

impl ConnectorResource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }

    async fn fetch(&self, script_name: &str) -> ProviderResult<ConnectorModel> {
        let detail = self
            .client
            .get_connector(script_name)
            .await
            .during("Get connector")?;
        Ok(ConnectorModel::from_response(detail))
    }
}

impl ResourceType for ConnectorResource {
    fn name(&self) -> &'static str {
        "connector"
    }

    fn schema(&self) -> ResourceSchema {
        schema::resource_schema()
    }
}

#[async_trait]
impl Resource for ConnectorResource {
    type Model = ConnectorModel;

    async fn create(&self, plan: &ConnectorModel) -> ProviderResult<ConnectorModel> {
        let request = plan.to_create_request()?;
        let detail = self
            .client
            .create_connector(&request)
            .await
            .during("Create connector")?;
        let created = ConnectorModel::from_response(detail);

        let operations = diff(&plan.configured_over(&created), &created);
        if operations.is_empty() {
            return Ok(created);
        }

        let script_name = require(&created.script_name, "script_name")?;
        debug!(
            "isc_connector {}: applying {} field(s) after create",
            script_name,
            operations.len()
        );
        match self
            .client
            .update_connector(script_name, &operations)
            .await
            .during("Update connector")
        {
            Ok(detail) => Ok(ConnectorModel::from_response(detail)),
            Err(e) => {
                // Nothing was recorded yet; remove the half-configured connector
                if let Err(rollback) = self.client.delete_connector(script_name).await {
                    warn!(
                        "isc_connector {}: rollback after failed create left the connector in place: {}",
                        script_name, rollback
                    );
                }
                Err(e)
            }
        }
    }

    async fn read(&self, state: &ConnectorModel) -> ProviderResult<Option<ConnectorModel>> {
        let script_name = require(&state.script_name, "script_name")?;
        let detail = found(
            self.client.get_connector(script_name).await,
            "Get connector",
        )?;
        Ok(detail.map(ConnectorModel::from_response))
    }

    async fn update(
        &self,
        plan: &ConnectorModel,
        state: &ConnectorModel,
    ) -> ProviderResult<ConnectorModel> {
        let script_name = require(&state.script_name, "script_name")?;
        let operations = diff(plan, state);

        if operations.is_empty() {
            if plan != state {
                debug!(
                    "{} {}: plan differs outside patchable fields, nothing to send",
                    ConnectorModel::RESOURCE_TYPE,
                    script_name
                );
            }
            return self.fetch(script_name).await;
        }

        debug!(
            "{} {}: patching {:?}",
            ConnectorModel::RESOURCE_TYPE,
            script_name,
            changed_fields(plan, state)
        );
        let detail = self
            .client
            .update_connector(script_name, &operations)
            .await
            .during("Update connector")?;
        Ok(ConnectorModel::from_response(detail))
    }

    async fn delete(&self, state: &ConnectorModel) -> ProviderResult<()> {
        let script_name = require(&state.script_name, "script_name")?;
        deleted(
            self.client.delete_connector(script_name).await,
            "Delete connector",
        )
    }

    async fn import_state(&self, id: &str) -> ProviderResult<ConnectorModel> {
        self.fetch(id).await
    }
}

pub struct ConnectorDataSource {
    client: Arc<IscClient>,
}

impl ConnectorDataSource {
    pub fn new(client: Arc<IscClient>) -> Self {
        Self { client }
    }
}

impl ResourceType for ConnectorDataSource {
    fn name(&self) -> &'static str {
        "connector"
    }

    fn schema(&self) -> ResourceSchema {
        schema::data_source_schema()
    }
}

#[async_trait]
impl DataSource for ConnectorDataSource {
    type Model = ConnectorModel;

    async fn read(&self, config: &ConnectorModel) -> ProviderResult<ConnectorModel> {
        let script_name = require(&config.script_name, "script_name")?;
        let detail = self
            .client
            .get_connector(script_name)
            .await
            .during("Read connector")?;
        Ok(ConnectorModel::from_response(detail))
    }
}
