use isc_core::patch::PatchOperation;

use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::FormDefinition;

impl IscClient {
    pub async fn get_form_definition(&self, id: &str) -> ClientResult<FormDefinition> {
        let url = self.endpoint(&["beta", "form-definitions", id])?;
        self.get_json(url).await
    }

    pub async fn create_form_definition(
        &self,
        form: &FormDefinition,
    ) -> ClientResult<FormDefinition> {
        let url = self.endpoint(&["beta", "form-definitions"])?;
        self.post_json(url, form).await
    }

    pub async fn update_form_definition(
        &self,
        id: &str,
        operations: &[PatchOperation],
    ) -> ClientResult<FormDefinition> {
        let url = self.endpoint(&["beta", "form-definitions", id])?;
        self.patch_json(url, operations).await
    }

    pub async fn delete_form_definition(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["beta", "form-definitions", id])?;
        self.delete(url).await
    }
}
