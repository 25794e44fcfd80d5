use crate::core::query::fetch_json;
use crate::core::transcode::json_to_yaml;
use crate::domain::model::ResourceKind;
use crate::domain::ports::{AgentApi, Storage};
use crate::utils::error::Result;

/// Dumps the agent collections as YAML documents, one file per kind.
pub struct SnapshotWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> SnapshotWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn write(&self, agent: &dyn AgentApi, kind: ResourceKind) -> Result<String> {
        let json = fetch_json(agent, kind).await?;
        let yaml = json_to_yaml(&json)?;

        let file = kind.snapshot_file();
        self.storage.write_file(file, yaml.as_bytes()).await?;
        tracing::info!("📁 Saved {} snapshot to {}", kind, file);

        Ok(file.to_string())
    }

    /// Writes every kind in order, stopping at the first failure.
    pub async fn write_all(&self, agent: &dyn AgentApi) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(ResourceKind::ALL.len());
        for kind in ResourceKind::ALL {
            written.push(self.write(agent, kind).await?);
        }
        Ok(written)
    }
}
