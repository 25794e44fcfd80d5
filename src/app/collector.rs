use crate::adapters::InspectorClient;
use crate::core::policy::PolicyGenerator;
use crate::domain::model::ResourceKind;
use crate::domain::ports::Storage;
use crate::utils::error::{InspectorError, Result};
use crate::utils::validation::validate_inspector_host;

pub const RAW_DIR: &str = "cilium_client";
pub const POLICY_DIR: &str = "network_policies";

#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    pub host: String,
    pub endpoints: usize,
    pub services: usize,
    pub files: Vec<String>,
}

/// Pulls raw state from remote inspectors into local storage.
pub struct Collector<S: Storage> {
    client: InspectorClient,
    storage: S,
    generate_policies: bool,
}

impl<S: Storage> Collector<S> {
    pub fn new(client: InspectorClient, storage: S) -> Self {
        Self {
            client,
            storage,
            generate_policies: false,
        }
    }

    pub fn with_policies(mut self, enabled: bool) -> Self {
        self.generate_policies = enabled;
        self
    }

    pub async fn collect_host(&self, host: &str) -> Result<CollectReport> {
        validate_inspector_host("host", host, self.client.port())?;

        let mut report = CollectReport {
            host: host.to_string(),
            ..Default::default()
        };

        for kind in ResourceKind::ALL {
            let raw = self.client.get_raw_json(host, kind).await?;
            let count = raw.as_array().map(|items| items.len()).unwrap_or(0);
            match kind {
                ResourceKind::Endpoints => report.endpoints = count,
                ResourceKind::Services => report.services = count,
            }

            let path = format!("{}/{}/{}", RAW_DIR, host, kind.raw_file());
            self.storage
                .write_file(&path, &serde_json::to_vec_pretty(&raw)?)
                .await?;
            report.files.push(path);

            if self.generate_policies && kind == ResourceKind::Endpoints {
                let endpoints = raw.as_array().map(Vec::as_slice).unwrap_or_default();
                let generator = PolicyGenerator::from_endpoints(endpoints);
                let written = generator.write_all(&self.storage, POLICY_DIR).await?;
                tracing::info!("🛡️ {} policy skeletons generated for {}", written.len(), host);
                report.files.extend(written);
            }
        }

        Ok(report)
    }

    /// Collects every host; a failing host is skipped unless all of them fail.
    pub async fn collect_all(&self, hosts: &[String]) -> Result<Vec<CollectReport>> {
        if hosts.is_empty() {
            return Err(InspectorError::ConfigError {
                message: "no inspector hosts configured ([cluster] hosts or --host)".to_string(),
            });
        }

        let mut reports = Vec::new();
        let mut last_error = None;

        for host in hosts {
            match self.collect_host(host).await {
                Ok(report) => {
                    tracing::info!(
                        "✅ {}: {} endpoints, {} services",
                        host,
                        report.endpoints,
                        report.services
                    );
                    reports.push(report);
                }
                Err(e) => {
                    tracing::warn!("⚠️ Collecting from {} failed: {}", host, e);
                    last_error = Some(e);
                }
            }
        }

        match (reports.is_empty(), last_error) {
            (true, Some(e)) => Err(e),
            _ => Ok(reports),
        }
    }
}
