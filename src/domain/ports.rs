use crate::domain::model::{MissingContentPolicy, PageJob, RenderedSite};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn site_title(&self) -> &str;
    fn base_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn missing_content_policy(&self) -> MissingContentPolicy;
    fn archive_filename(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PageJob>>;
    async fn transform(&self, jobs: Vec<PageJob>) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}
