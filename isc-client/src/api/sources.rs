use crate::client::IscClient;
use crate::error::ClientResult;
use crate::models::Source;

impl IscClient {
    pub async fn get_source(&self, id: &str) -> ClientResult<Source> {
        let url = self.endpoint(&["v3", "sources", id])?;
        self.get_json(url).await
    }

    pub async fn create_source(&self, source: &Source) -> ClientResult<Source> {
        let url = self.endpoint(&["v3", "sources"])?;
        self.post_json(url, source).await
    }

    /// Full replacement of a source
    pub async fn put_source(&self, id: &str, source: &Source) -> ClientResult<Source> {
        let url = self.endpoint(&["v3", "sources", id])?;
        self.put_json(url, source).await
    }

    pub async fn delete_source(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&["v3", "sources", id])?;
        self.delete(url).await
    }
}
