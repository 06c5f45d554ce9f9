use isc_core::patch::PatchOperation;

use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::{ManagedCluster, ManagedClusterRequest};

impl IscClient {
    pub async fn get_managed_cluster(&self, id: &str) -> ClientResult<ManagedCluster> {
        let url = self.endpoint(&["beta", "managed-clusters", id])?;
        self.get_json(url).await
    }

    pub async fn create_managed_cluster(
        &self,
        request: &ManagedClusterRequest,
    ) -> ClientResult<ManagedCluster> {
        let url = self.endpoint(&["beta", "managed-clusters"])?;
        self.post_json(url, request).await
    }

    pub async fn update_managed_cluster(
        &self,
        id: &str,
        operations: &[PatchOperation],
    ) -> ClientResult<ManagedCluster> {
        let url = self.endpoint(&["beta", "managed-clusters", id])?;
        self.patch_json(url, operations).await
    }

    /// Delete a cluster; `remove_clients` also removes its virtual appliances
    pub async fn delete_managed_cluster(&self, id: &str, remove_clients: bool) -> ClientResult<()> {
        let mut url = self.endpoint(&["beta", "managed-clusters", id])?;
        url.query_pairs_mut()
            .append_pair("removeClients", if remove_clients { "true" } else { "false" });
        self.delete(url).await
    }
}
