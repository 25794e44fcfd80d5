use crate::domain::model::{Record, ResourceKind};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Writes `data` to `path` relative to the storage root, replacing any existing file.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Read access to the cilium agent state.
#[async_trait]
pub trait AgentApi: Send + Sync {
    async fn list_endpoints(&self) -> Result<Vec<Record>>;
    async fn list_services(&self) -> Result<Vec<Record>>;

    async fn list(&self, kind: ResourceKind) -> Result<Vec<Record>> {
        match kind {
            ResourceKind::Endpoints => self.list_endpoints().await,
            ResourceKind::Services => self.list_services().await,
        }
    }
}
