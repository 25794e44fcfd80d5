use crate::domain::model::ResourceKind;
use crate::utils::error::{InspectorError, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for inspectors running on cluster nodes.
#[derive(Debug, Clone)]
pub struct InspectorClient {
    client: Client,
    port: u16,
}

impl InspectorClient {
    pub fn new(port: u16, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url_for(&self, host: &str, kind: ResourceKind) -> String {
        format!("http://{}:{}{}", host, self.port, kind.route())
    }

    pub async fn get_raw_json(&self, host: &str, kind: ResourceKind) -> Result<serde_json::Value> {
        let url = self.url_for(host, kind);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(InspectorError::InspectorStatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn get_endpoints_raw_json(&self, host: &str) -> Result<serde_json::Value> {
        self.get_raw_json(host, ResourceKind::Endpoints).await
    }

    pub async fn get_services_raw_json(&self, host: &str) -> Result<serde_json::Value> {
        self.get_raw_json(host, ResourceKind::Services).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let client = InspectorClient::new(64444, None).unwrap();
        assert_eq!(
            client.url_for("10.0.0.7", ResourceKind::Endpoints),
            "http://10.0.0.7:64444/endpoints"
        );
        assert_eq!(
            client.url_for("node-2", ResourceKind::Services),
            "http://node-2:64444/services"
        );
    }
}
