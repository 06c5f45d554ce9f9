use isc_core::patch::PatchOperation;

use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::LifecycleState;

impl IscClient {
    pub async fn get_lifecycle_state(
        &self,
        identity_profile_id: &str,
        id: &str,
    ) -> ClientResult<LifecycleState> {
        let url = self.endpoint(&[
            "v3",
            "identity-profiles",
            identity_profile_id,
            "lifecycle-states",
            id,
        ])?;
        self.get_json(url).await
    }

    pub async fn create_lifecycle_state(
        &self,
        identity_profile_id: &str,
        state: &LifecycleState,
    ) -> ClientResult<LifecycleState> {
        let url = self.endpoint(&[
            "v3",
            "identity-profiles",
            identity_profile_id,
            "lifecycle-states",
        ])?;
        self.post_json(url, state).await
    }

    pub async fn update_lifecycle_state(
        &self,
        identity_profile_id: &str,
        id: &str,
        operations: &[PatchOperation],
    ) -> ClientResult<LifecycleState> {
        let url = self.endpoint(&[
            "v3",
            "identity-profiles",
            identity_profile_id,
            "lifecycle-states",
            id,
        ])?;
        self.patch_json(url, operations).await
    }

    pub async fn delete_lifecycle_state(
        &self,
        identity_profile_id: &str,
        id: &str,
    ) -> ClientResult<()> {
        let url = self.endpoint(&[
            "v3",
            "identity-profiles",
            identity_profile_id,
            "lifecycle-states",
            id,
        ])?;
        self.delete(url).await
    }
}
