use isc_core::patch::PatchOperation;

use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::{ConnectorDetail, CreateConnectorRequest};

impl IscClient {
    pub async fn get_connector(&self, script_name: &str) -> ClientResult<ConnectorDetail> {
        let url = self.endpoint(&["beta", "connectors", script_name])?;
        self.get_json(url).await
    }

    pub async fn create_connector(
        &self,
        request: &CreateConnectorRequest,
    ) -> ClientResult<ConnectorDetail> {
        let url = self.endpoint(&["beta", "connectors"])?;
        self.post_json(url, request).await
    }

    pub async fn update_connector(
        &self,
        script_name: &str,
        operations: &[PatchOperation],
    ) -> ClientResult<ConnectorDetail> {
        let url = self.endpoint(&["beta", "connectors", script_name])?;
        self.patch_json(url, operations).await
    }

    pub async fn delete_connector(&self, script_name: &str) -> ClientResult<()> {
        let url = self.endpoint(&["beta", "connectors", script_name])?;
        self.delete(url).await
    }
}
