use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::IdentityAttribute;

impl IscClient {
    pub async fn get_identity_attribute(&self, name: &str) -> ClientResult<IdentityAttribute> {
        let url = self.endpoint(&["beta", "identity-attributes", name])?;
        self.get_json(url).await
    }

    pub async fn create_identity_attribute(
        &self,
        attribute: &IdentityAttribute,
    ) -> ClientResult<IdentityAttribute> {
        let url = self.endpoint(&["beta", "identity-attributes"])?;
        self.post_json(url, attribute).await
    }

    /// Full replacement of an identity attribute
    pub async fn put_identity_attribute(
        &self,
        name: &str,
        attribute: &IdentityAttribute,
    ) -> ClientResult<IdentityAttribute> {
        let url = self.endpoint(&["beta", "identity-attributes", name])?;
        self.put_json(url, attribute).await
    }

    pub async fn delete_identity_attribute(&self, name: &str) -> ClientResult<()> {
        let url = self.endpoint(&["beta", "identity-attributes", name])?;
        self.delete(url).await
    }
}
