use crate::domain::model::ResourceKind;
use crate::domain::ports::AgentApi;
use crate::utils::error::Result;

/// Reads one collection from the agent and renders it as a compact JSON array.
///
/// The HTTP body and the startup snapshot are both produced from these bytes.
pub async fn fetch_json(agent: &dyn AgentApi, kind: ResourceKind) -> Result<Vec<u8>> {
    let records = agent.list(kind).await?;
    tracing::debug!("Fetched {} {} from agent", records.len(), kind);
    Ok(serde_json::to_vec(&records)?)
}
