//! L3/L4 network policy skeletons.
//!
//! One `CiliumNetworkPolicy` per distinct `app`/`version` pair found in the
//! endpoint identity labels. Ingress and egress rules are left empty.

use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const POLICY_API_VERSION: &str = "cilium.io/v2";
pub const POLICY_KIND: &str = "CiliumNetworkPolicy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiliumNetworkPolicy {
    pub api_version: String,
    pub kind: String,
    pub metadata: PolicyMetadata,
    pub spec: PolicySpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySpec {
    pub endpoint_selector: EndpointSelector,
    pub ingress: Vec<serde_json::Value>,
    pub egress: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSelector {
    pub match_labels: MatchLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLabels {
    pub app: String,
    pub version: String,
}

/// Splits a label such as `k8s:app=reviews` into `("app", "reviews")`.
///
/// The source prefix is everything up to the last `:`.
pub fn parse_label(label: &str) -> Option<(&str, &str)> {
    let info = label.trim().rsplit(':').next()?;
    info.split_once('=')
}

impl CiliumNetworkPolicy {
    pub fn for_endpoint(endpoint: &Record) -> Option<Self> {
        let labels = endpoint.pointer("/status/identity/labels")?.as_array()?;
        let namespace = endpoint
            .pointer("/status/external-identifiers/k8s-namespace")?
            .as_str()?;

        let mut app = None;
        let mut version = None;
        for label in labels.iter().filter_map(|l| l.as_str()) {
            match parse_label(label) {
                Some(("app", value)) => app = Some(value),
                Some(("version", value)) => version = Some(value),
                _ => {}
            }
        }
        let (app, version) = (app?, version?);

        Some(Self {
            api_version: POLICY_API_VERSION.to_string(),
            kind: POLICY_KIND.to_string(),
            metadata: PolicyMetadata {
                name: format!("{}-{}-l3-l4-policy", app, version),
                namespace: namespace.to_string(),
            },
            spec: PolicySpec {
                endpoint_selector: EndpointSelector {
                    match_labels: MatchLabels {
                        app: app.to_string(),
                        version: version.to_string(),
                    },
                },
                ingress: Vec::new(),
                egress: Vec::new(),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyGenerator {
    l3_l4_policies: Vec<CiliumNetworkPolicy>,
}

impl PolicyGenerator {
    pub fn from_endpoints(endpoints: &[Record]) -> Self {
        let mut seen = HashSet::new();
        let mut l3_l4_policies = Vec::new();

        for endpoint in endpoints {
            match CiliumNetworkPolicy::for_endpoint(endpoint) {
                Some(policy) => {
                    if seen.insert(policy.name().to_string()) {
                        l3_l4_policies.push(policy);
                    }
                }
                None => {
                    let id = endpoint.get("id").cloned().unwrap_or_default();
                    tracing::debug!("Endpoint {} has no app/version labels, skipping", id);
                }
            }
        }

        Self { l3_l4_policies }
    }

    pub fn policies(&self) -> &[CiliumNetworkPolicy] {
        &self.l3_l4_policies
    }

    /// 每個 policy 寫成 `<dir>/<name>.yaml`
    pub async fn write_all<S: Storage>(&self, storage: &S, dir: &str) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(self.l3_l4_policies.len());
        for policy in &self.l3_l4_policies {
            let path = format!("{}/{}.yaml", dir, policy.name());
            let yaml = serde_yaml::to_string(policy)?;
            storage.write_file(&path, yaml.as_bytes()).await?;
            written.push(path);
        }
        Ok(written)
    }
}
