use crate::domain::model::{RawTable, TransformOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = std::io::Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawTable>;
    async fn transform(&self, table: RawTable) -> Result<TransformOutcome>;
    async fn load(&self, outcome: TransformOutcome) -> Result<String>;
}
