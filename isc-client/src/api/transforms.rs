use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::Transform;

impl IscClient {
    pub async fn get_transform(&self, id: &str) -> ClientResult<Transform> {
        let url = self.endpoint(&["v3", "transforms", id])?;
        self.get_json(url).await
    }

    pub async fn create_transform(&self, transform: &Transform) -> ClientResult<Transform> {
        let url = self.endpoint(&["v3", "transforms"])?;
        self.post_json(url, transform).await
    }

    /// Replace a transform; name and type cannot change
    pub async fn put_transform(&self, id: &str, transform: &Transform) -> ClientResult<Transform> {
        let url = self.endpoint(&["v3", "transforms", id])?;
        self.put_json(url, transform).await
    }

    pub async fn delete_transform(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["v3", "transforms", id])?;
        self.delete(url).await
    }
}
