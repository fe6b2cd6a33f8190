use crate::domain::model::{MapRecord, Source};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn sources(&self) -> &[Source];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn sources(&self) -> &[Source];
    /// `Ok(None)` means the source had nothing to offer (204 or an empty
    /// collection); it is not an error.
    async fn extract(&self, source: &Source) -> Result<Option<Vec<MapRecord>>>;
    async fn transform(&self, maps: Vec<MapRecord>) -> Result<Vec<MapRecord>>;
    async fn load(&self, source: &Source, maps: &[MapRecord]) -> Result<String>;
}
